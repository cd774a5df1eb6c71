// scanseg-data/src/augment/transforms.rs

use super::options::{AugmentOptions, Flip, Rotation, Zoom};
use image::imageops::FilterType;
use image::DynamicImage;

/// Whether a raster is the photometric image or its label mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterRole {
    Image,
    Label,
}

/// Applies `options` to one raster: flip, then zoom, then rotate, then
/// gamma (image role only).
///
/// The order is fixed. Cropping after a flip selects a different window than
/// cropping before it.
pub fn apply(
    img: DynamicImage,
    options: &AugmentOptions,
    role: RasterRole,
    filter: FilterType,
) -> DynamicImage {
    let img = flip(img, options.flip);
    let img = zoom(img, options.zoom, filter);
    let img = rotate(img, options.rotation);
    match (role, options.gamma) {
        (RasterRole::Image, Some(gamma)) => adjust_gamma(img, gamma),
        _ => img,
    }
}

pub fn flip(img: DynamicImage, flip: Flip) -> DynamicImage {
    match flip {
        Flip::None => img,
        Flip::Horizontal => img.fliph(),
        Flip::Vertical => img.flipv(),
    }
}

/// Offset and size of the centered crop keeping `ratio` of `edge`.
///
/// `size = round(edge * ratio)`, `offset = round(edge * (1 - ratio) / 2)`.
pub fn crop_window(edge: u32, ratio: f64) -> (u32, u32) {
    let size = (edge as f64 * ratio).round() as u32;
    let offset = (edge as f64 * (1.0 - ratio) / 2.0).round() as u32;
    let offset = offset.min(edge);
    (offset, size.min(edge - offset))
}

/// Crops the centered window for `zoom` and resizes it back to the input dimensions.
pub fn zoom(img: DynamicImage, zoom: Zoom, filter: FilterType) -> DynamicImage {
    if zoom == Zoom::None {
        return img;
    }
    let (width, height) = (img.width(), img.height());
    let (x, crop_w) = crop_window(width, zoom.ratio());
    let (y, crop_h) = crop_window(height, zoom.ratio());
    img.crop_imm(x, y, crop_w, crop_h)
        .resize_exact(width, height, filter)
}

/// Rotates counter-clockwise.
pub fn rotate(img: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => img,
        // image's rotate270 turns clockwise by 270, i.e. a quarter turn counter-clockwise.
        Rotation::Quarter => img.rotate270(),
        Rotation::Half => img.rotate180(),
    }
}

/// Lookup table for `out = 255 * (in / 255) ^ gamma` with unit gain.
pub fn gamma_lut(gamma: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        let v = (255.0 + 1.0 - 1e-3) * (i as f32 / 255.0).powf(gamma);
        *slot = v.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Photometric gamma adjustment. Alpha channels are left untouched.
///
/// Only meant for images; labels hold class values, not intensities.
pub fn adjust_gamma(img: DynamicImage, gamma: f32) -> DynamicImage {
    let lut = gamma_lut(gamma);
    match img {
        DynamicImage::ImageLuma8(mut buf) => {
            remap(&mut buf, 1, false, &lut);
            DynamicImage::ImageLuma8(buf)
        }
        DynamicImage::ImageLumaA8(mut buf) => {
            remap(&mut buf, 2, true, &lut);
            DynamicImage::ImageLumaA8(buf)
        }
        DynamicImage::ImageRgb8(mut buf) => {
            remap(&mut buf, 3, false, &lut);
            DynamicImage::ImageRgb8(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => {
            remap(&mut buf, 4, true, &lut);
            DynamicImage::ImageRgba8(buf)
        }
        other => {
            let mut buf = other.to_rgba8();
            remap(&mut buf, 4, true, &lut);
            DynamicImage::ImageRgba8(buf)
        }
    }
}

fn remap(samples: &mut [u8], channels: usize, has_alpha: bool, lut: &[u8; 256]) {
    for (i, v) in samples.iter_mut().enumerate() {
        if has_alpha && i % channels == channels - 1 {
            continue;
        }
        *v = lut[*v as usize];
    }
}

#[cfg(test)]
#[path = "transforms_test.rs"]
mod tests;

//! Decoding sample files and turning pixel grids into `Raster`s.

use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GrayImage};
use scanseg_core::{Raster, ScanSegError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Maximum 8-bit intensity; images are divided by it during normalization.
pub const MAX_INTENSITY: f32 = 255.0;

/// Opens and fully decodes the file behind sample `index`.
///
/// Sources with more than 8 bits per channel are reduced to 8 bits so that
/// normalization by [`MAX_INTENSITY`] maps every image into `[0, 1]`.
///
/// # Errors
///
/// Returns `ScanSegError::SampleLoad` naming `index` and `path` if the file is
/// missing or cannot be decoded.
pub fn load_image(index: usize, path: &Path) -> Result<DynamicImage, ScanSegError> {
    let img = image::open(path).map_err(|e| ScanSegError::SampleLoad {
        index,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(to_eight_bit(img))
}

/// How a label file stores its pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEncoding {
    /// 8-bit gray or colour intensities.
    Intensity,
    /// Palette indices or sub-byte gray levels, kept as stored.
    ClassIndex,
}

impl LabelEncoding {
    /// Filter to resample a label of this encoding with. Class indices are
    /// never blended.
    pub fn filter(self, configured: FilterType) -> FilterType {
        match self {
            LabelEncoding::Intensity => configured,
            LabelEncoding::ClassIndex => FilterType::Nearest,
        }
    }
}

/// Opens the label file behind sample `index`.
///
/// Palette PNGs yield their palette indices and 1, 2 or 4-bit grayscale PNGs
/// their stored levels, both as single-channel `L8`. Everything else decodes
/// like [`load_image`].
///
/// # Errors
///
/// Returns `ScanSegError::SampleLoad` naming `index` and `path` if the file is
/// missing or cannot be decoded.
pub fn load_label(index: usize, path: &Path) -> Result<(DynamicImage, LabelEncoding), ScanSegError> {
    match load_class_indices(index, path)? {
        Some(img) => Ok((img, LabelEncoding::ClassIndex)),
        None => Ok((load_image(index, path)?, LabelEncoding::Intensity)),
    }
}

/// `None` unless `path` is a palette or sub-byte grayscale PNG.
fn load_class_indices(index: usize, path: &Path) -> Result<Option<DynamicImage>, ScanSegError> {
    let load_error = |reason: String| ScanSegError::SampleLoad {
        index,
        path: path.to_path_buf(),
        reason,
    };
    let Ok(file) = File::open(path) else {
        return Ok(None);
    };
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let Ok(mut reader) = decoder.read_info() else {
        return Ok(None);
    };
    let info = reader.info();
    let bits = match (info.color_type, info.bit_depth as u8) {
        (png::ColorType::Indexed, bits) => bits,
        (png::ColorType::Grayscale, bits) if bits < 8 => bits,
        _ => return Ok(None),
    };

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| load_error(e.to_string()))?;
    let data = unpack_rows(
        &buf,
        frame.width as usize,
        frame.height as usize,
        frame.line_size,
        bits,
    );
    GrayImage::from_raw(frame.width, frame.height, data)
        .map(|img| Some(DynamicImage::ImageLuma8(img)))
        .ok_or_else(|| load_error("truncated pixel data".to_string()))
}

/// Splits rows of packed `bits`-wide samples into one byte per pixel.
fn unpack_rows(buf: &[u8], width: usize, height: usize, line_size: usize, bits: u8) -> Vec<u8> {
    let bits = usize::from(bits);
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;
    let mut out = Vec::with_capacity(width * height);
    for row in buf.chunks(line_size.max(1)).take(height) {
        for x in 0..width {
            let byte = row.get(x / per_byte).copied().unwrap_or(0);
            let shift = 8 - bits * (x % per_byte + 1);
            out.push((byte >> shift) & mask);
        }
    }
    out
}

fn is_eight_bit(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
    )
}

pub fn to_eight_bit(img: DynamicImage) -> DynamicImage {
    match img.color() {
        color if is_eight_bit(color) => img,
        ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
        ColorType::La16 => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        color if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Image raster with every value divided by [`MAX_INTENSITY`].
pub fn normalize_image(img: &DynamicImage) -> Result<Raster, ScanSegError> {
    to_raster(img, |v| f32::from(v) / MAX_INTENSITY)
}

/// Label raster holding the raw pixel values as `f32`.
pub fn label_values(img: &DynamicImage) -> Result<Raster, ScanSegError> {
    to_raster(img, f32::from)
}

/// `[H, W]` for single-channel images, `[H, W, C]` otherwise.
fn to_raster<F: Fn(u8) -> f32>(img: &DynamicImage, convert: F) -> Result<Raster, ScanSegError> {
    let converted;
    let img = if is_eight_bit(img.color()) {
        img
    } else {
        converted = to_eight_bit(img.clone());
        &converted
    };
    let (width, height) = (img.width() as usize, img.height() as usize);
    let channels = img.color().channel_count() as usize;
    let data = img.as_bytes().iter().map(|&v| convert(v)).collect();
    let shape = if channels == 1 {
        vec![height, width]
    } else {
        vec![height, width, channels]
    };
    Raster::new(data, shape)
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;

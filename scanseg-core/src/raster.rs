// src/raster.rs

use crate::error::ScanSegError;

/// A dense, row-major grid of `f32` pixel values.
///
/// Single-channel rasters have shape `[height, width]`; multi-channel rasters
/// have shape `[height, width, channels]` with channels interleaved per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: Vec<f32>,
    shape: Vec<usize>,
}

impl Raster {
    /// Creates a raster from flat row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns `ScanSegError::RankMismatch` if the shape is neither 2-D nor 3-D,
    /// and `ScanSegError::RasterCreation` if `data.len()` does not match the
    /// number of elements implied by `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, ScanSegError> {
        if shape.len() != 2 && shape.len() != 3 {
            return Err(ScanSegError::RankMismatch { rank: shape.len() });
        }
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(ScanSegError::RasterCreation {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Self { data, shape })
    }

    /// Creates a raster of the given shape filled with `value`.
    pub fn full(shape: Vec<usize>, value: f32) -> Result<Self, ScanSegError> {
        let numel = shape.iter().product();
        Self::new(vec![value; numel], shape)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn height(&self) -> usize {
        self.shape[0]
    }

    pub fn width(&self) -> usize {
        self.shape[1]
    }

    /// Number of channels per pixel; 1 for a 2-D raster.
    pub fn channels(&self) -> usize {
        self.shape.get(2).copied().unwrap_or(1)
    }

    /// Returns the value at row `y`, column `x`, channel `c`, or `None` when out of range.
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        if y >= self.height() || x >= self.width() || c >= self.channels() {
            return None;
        }
        let offset = (y * self.width() + x) * self.channels() + c;
        self.data.get(offset).copied()
    }

    /// Smallest and largest value, or `None` for an empty raster.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Applies `f` to every value, keeping the shape.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Raster {
        Raster {
            data: self.data.iter().map(|&v| f(v)).collect(),
            shape: self.shape.clone(),
        }
    }
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod tests;

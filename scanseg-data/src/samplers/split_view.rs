// scanseg-data/src/samplers/split_view.rs

use scanseg_core::ScanSegError;
use std::ops::Range;

/// A contiguous `[start, end)` range of dataset indices, visited in ascending order.
///
/// Produced by [`SampleIndex::view_for`](crate::SampleIndex::view_for) for a
/// mode; can also be built by hand to iterate an arbitrary slice of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitView {
    start: usize,
    end: usize,
}

impl SplitView {
    /// Creates a view over `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns `ScanSegError::Configuration` if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, ScanSegError> {
        if start > end {
            return Err(ScanSegError::Configuration(format!(
                "split view start {} is past its end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered before any clamping.
    pub fn size(&self) -> usize {
        self.end - self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// Restricts the view so that `0 <= start <= end <= dataset_len`.
    pub fn clamped(&self, dataset_len: usize) -> SplitView {
        let end = self.end.min(dataset_len);
        SplitView {
            start: self.start.min(end),
            end,
        }
    }

    /// Ascending indices of the view that exist in a dataset of `dataset_len` items.
    pub fn indices(&self, dataset_len: usize) -> Range<usize> {
        let view = self.clamped(dataset_len);
        view.start..view.end
    }
}

#[cfg(test)]
#[path = "split_view_test.rs"]
mod tests;

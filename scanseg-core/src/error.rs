use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the scanseg crates.
///
/// Underlying io and decode errors are kept as their rendered message so the
/// enum stays `Clone` and `PartialEq` for easier testing.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScanSegError {
    /// `root/scans` or `root/labels` is missing or cannot be listed.
    #[error("Dataset directory {path:?} not found or unreadable: {reason}")]
    DatasetNotFound { path: PathBuf, reason: String },

    /// The image or label file behind a sample index could not be opened or decoded.
    #[error("Failed to load sample {index} from {path:?}: {reason}")]
    SampleLoad {
        index: usize,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Raster creation error: data length {data_len} does not match shape {shape:?}")]
    RasterCreation { data_len: usize, shape: Vec<usize> },

    #[error("Raster rank must be 2 (HW) or 3 (HWC), got {rank}")]
    RankMismatch { rank: usize },
}

//! Paired scan/label sample loading for segmentation training.
//!
//! A [`SampleIndex`] pairs `root/scans/<name>` with `root/labels/<name>` and
//! fixes the train/test boundary. A [`SampleProducer`] walks the index range
//! of the active [`Mode`] and yields one resized, augmented and normalized
//! [`Sample`] per step.

pub mod augment;
pub mod config;
pub mod datasets;
pub mod decode;
pub mod mode;
pub mod producer;
pub mod sample;
pub mod samplers;

// Re-export main components
pub use augment::{AugmentOptions, FixedOptions, Flip, OptionSource, RandomOptions, Rotation, Zoom};
pub use config::{LoaderConfig, LoaderConfigBuilder};
pub use datasets::{Dataset, SampleIndex, SamplePaths};
pub use mode::Mode;
pub use producer::{SampleIter, SampleProducer};
pub use sample::Sample;
pub use samplers::SplitView;
pub use scanseg_core::{Raster, ScanSegError};

//! Per-sample augmentation: an options record drawn once per sample and pure
//! transforms that apply it to the image and its label.

pub mod options;
pub mod transforms;

pub use options::{
    AugmentOptions, FixedOptions, Flip, OptionSource, RandomOptions, Rotation, Zoom, GAMMA_CHOICES,
};
pub use transforms::{apply, RasterRole};

//! Loader configuration.
//!
//! Defaults match the layout the training scripts expect: a `data` root, a
//! 10% test split and 572x572 samples.

use image::imageops::FilterType;
use scanseg_core::ScanSegError;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "data";
pub const DEFAULT_BATCH_SIZE: usize = 2;
pub const DEFAULT_TEST_FRACTION: f64 = 0.1;
pub const DEFAULT_TARGET_EDGE: u32 = 572;

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Dataset root containing `scans/` and `labels/`.
    pub root: PathBuf,
    /// Forwarded to the training loop; iteration itself yields single samples.
    pub batch_size: usize,
    /// Fraction of the dataset held out for the test partition, in `(0, 1)`.
    pub test_fraction: f64,
    /// Edge length of the square rasters every sample is resized to.
    pub target_edge: u32,
    /// Interpolation used for the initial resize and for crop-and-resize zoom.
    pub filter: FilterType,
    /// Enables the photometric gamma step on images. Labels are never touched.
    pub gamma_correction: bool,
    /// Seed for the augmentation draws. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            batch_size: DEFAULT_BATCH_SIZE,
            test_fraction: DEFAULT_TEST_FRACTION,
            target_edge: DEFAULT_TARGET_EDGE,
            filter: FilterType::CatmullRom,
            gamma_correction: false,
            seed: None,
        }
    }
}

impl LoaderConfig {
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::new()
    }

    /// Checks every field that can be rejected before touching the filesystem.
    pub fn validate(&self) -> Result<(), ScanSegError> {
        check_split_fraction(self.test_fraction)?;
        if self.batch_size == 0 {
            return Err(ScanSegError::Configuration(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.target_edge == 0 {
            return Err(ScanSegError::Configuration(
                "target_edge must be at least 1 pixel".to_string(),
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "root={} batch_size={} test_fraction={:.3} edge={} filter={:?} gamma={} seed={}",
            self.root.display(),
            self.batch_size,
            self.test_fraction,
            self.target_edge,
            self.filter,
            self.gamma_correction,
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string())
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    inner: LoaderConfig,
}

impl LoaderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.inner.root = root.into();
        self
    }
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.inner.batch_size = batch_size;
        self
    }
    pub fn test_fraction(mut self, fraction: f64) -> Self {
        self.inner.test_fraction = fraction;
        self
    }
    pub fn target_edge(mut self, edge: u32) -> Self {
        self.inner.target_edge = edge;
        self
    }
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.inner.filter = filter;
        self
    }
    pub fn gamma_correction(mut self, enabled: bool) -> Self {
        self.inner.gamma_correction = enabled;
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.inner.seed = seed;
        self
    }
    /// Validates and returns the configuration.
    pub fn build(self) -> Result<LoaderConfig, ScanSegError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// Rejects split fractions outside the open interval `(0, 1)`, NaN included.
pub(crate) fn check_split_fraction(fraction: f64) -> Result<(), ScanSegError> {
    if fraction > 0.0 && fraction < 1.0 {
        Ok(())
    } else {
        Err(ScanSegError::Configuration(format!(
            "test fraction must lie in (0, 1), got {}",
            fraction
        )))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

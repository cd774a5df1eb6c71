// producer.rs
//! # SampleProducer
//!
//! Lazily produces augmented `(image, label)` samples for one partition of a
//! [`SampleIndex`].
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! use scanseg_data::{LoaderConfig, Mode, SampleProducer};
//!
//! let config = LoaderConfig::builder().root("data").build()?;
//! let mut producer = SampleProducer::from_config(&config)?;
//! producer.set_mode(Mode::Train);
//! for sample in producer.iter() {
//!     let (image, label) = sample?.into_pair();
//!     assert_eq!(image.height(), label.height());
//! }
//! # Ok::<(), scanseg_data::ScanSegError>(())
//! ```
//!
//! Each step loads both files, resizes them to the configured square edge,
//! draws one set of augmentation options, applies it to both rasters and
//! normalizes the image. The first failure is yielded as an error and ends
//! the pass.

use crate::augment::{self, AugmentOptions, OptionSource, RandomOptions, RasterRole};
use crate::config::LoaderConfig;
use crate::datasets::{Dataset, SampleIndex};
use crate::decode;
use crate::mode::Mode;
use crate::sample::Sample;
use crate::samplers::SplitView;
use image::imageops::FilterType;
use log::{debug, info};
use rand::rngs::StdRng;
use scanseg_core::ScanSegError;
use std::ops::Range;
use std::sync::Arc;

/// Produces samples for the active mode of a shared [`SampleIndex`].
///
/// # Type parameters
/// - `O`: where the per-sample augmentation options come from. Defaults to
///   random draws; [`FixedOptions`](crate::FixedOptions) pins them.
#[derive(Debug)]
pub struct SampleProducer<O: OptionSource = RandomOptions<StdRng>> {
    index: Arc<SampleIndex>,
    mode: Mode,
    batch_size: usize,
    target_edge: u32,
    filter: FilterType,
    options: O,
}

impl SampleProducer<RandomOptions<StdRng>> {
    /// Builds the index from `config.root` and draws options from a
    /// `config.seed`-seeded generator.
    pub fn from_config(config: &LoaderConfig) -> Result<Self, ScanSegError> {
        config.validate()?;
        let index = SampleIndex::build(&config.root, config.test_fraction)?;
        Self::with_index(Arc::new(index), config)
    }

    /// Uses an existing index, e.g. one shared with another producer.
    pub fn with_index(index: Arc<SampleIndex>, config: &LoaderConfig) -> Result<Self, ScanSegError> {
        let options = RandomOptions::from_seed(config.seed, config.gamma_correction);
        Self::with_options(index, config, options)
    }
}

impl<O: OptionSource> SampleProducer<O> {
    /// Creates a producer with an explicit option source. Starts in [`Mode::Train`].
    ///
    /// The index's own split fraction decides the boundary; `config.test_fraction`
    /// is only used when the index is built from the config.
    pub fn with_options(
        index: Arc<SampleIndex>,
        config: &LoaderConfig,
        options: O,
    ) -> Result<Self, ScanSegError> {
        config.validate()?;
        if config.test_fraction != index.split_fraction() {
            debug!(
                "SampleProducer: config test_fraction {} ignored, index was split at {}",
                config.test_fraction,
                index.split_fraction()
            );
        }
        info!(
            "SampleProducer: {} samples, train boundary {} ({})",
            index.len(),
            index.train_boundary(),
            config.describe()
        );
        Ok(Self {
            index,
            mode: Mode::default(),
            batch_size: config.batch_size,
            target_edge: config.target_edge,
            filter: config.filter,
            options,
        })
    }

    pub fn index(&self) -> &SampleIndex {
        &self.index
    }

    pub fn shared_index(&self) -> Arc<SampleIndex> {
        Arc::clone(&self.index)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Selects the partition walked by the next call to [`iter`](Self::iter).
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("SampleProducer: mode set to {}", mode);
        self.mode = mode;
    }

    /// Parses and sets the mode.
    ///
    /// # Errors
    ///
    /// Returns `ScanSegError::Configuration` for anything but `train` or `test`;
    /// the current mode is kept.
    pub fn set_mode_str(&mut self, mode: &str) -> Result<(), ScanSegError> {
        let mode = mode.parse::<Mode>()?;
        self.set_mode(mode);
        Ok(())
    }

    /// Batch size from the configuration. Iteration yields single samples;
    /// grouping them is left to the caller.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn target_edge(&self) -> u32 {
        self.target_edge
    }

    /// Index range of the current mode.
    pub fn view(&self) -> SplitView {
        self.index.view_for(self.mode)
    }

    /// Starts a fresh pass over the current mode's range.
    pub fn iter(&mut self) -> SampleIter<'_, O> {
        let view = self.view();
        self.iter_view(view)
    }

    /// Starts a fresh pass over an explicit range, clamped to the dataset.
    pub fn iter_view(&mut self, view: SplitView) -> SampleIter<'_, O> {
        let indices = view.indices(self.index.len());
        SampleIter {
            producer: self,
            indices,
            finished: false,
        }
    }

    /// Produces sample `index` with freshly drawn options.
    pub fn produce(&mut self, index: usize) -> Result<Sample, ScanSegError> {
        let options = self.options.draw();
        self.produce_with(index, &options)
    }

    /// Produces sample `index` with the given options.
    ///
    /// # Errors
    ///
    /// * `ScanSegError::IndexOutOfBounds` if `index` is past the dataset.
    /// * `ScanSegError::SampleLoad` if either file cannot be opened or decoded.
    pub fn produce_with(
        &self,
        index: usize,
        options: &AugmentOptions,
    ) -> Result<Sample, ScanSegError> {
        let paths = self.index.get(index)?;
        let image = decode::load_image(index, &paths.image)?;
        let (label, encoding) = decode::load_label(index, &paths.label)?;
        let label_filter = encoding.filter(self.filter);

        let edge = self.target_edge;
        let image = image.resize_exact(edge, edge, self.filter);
        let label = label.resize_exact(edge, edge, label_filter);

        let image = augment::apply(image, options, RasterRole::Image, self.filter);
        let label = augment::apply(label, options, RasterRole::Label, label_filter);
        debug!("SampleProducer: sample {} with {:?}", index, options);

        Ok(Sample {
            index,
            image: decode::normalize_image(&image)?,
            label: decode::label_values(&label)?,
        })
    }
}

/// Single-pass iterator over produced samples.
///
/// Yields `Some(Err(e))` once on the first failure and `None` afterwards.
pub struct SampleIter<'a, O: OptionSource> {
    producer: &'a mut SampleProducer<O>,
    indices: Range<usize>,
    finished: bool,
}

impl<O: OptionSource> Iterator for SampleIter<'_, O> {
    type Item = Result<Sample, ScanSegError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let index = match self.indices.next() {
            Some(index) => index,
            None => {
                self.finished = true;
                return None;
            }
        };
        let result = self.producer.produce(index);
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let (_, upper) = self.indices.size_hint();
        (0, upper)
    }
}

impl<O: OptionSource> std::iter::FusedIterator for SampleIter<'_, O> {}

#[cfg(test)]
#[path = "producer_test.rs"]
mod tests;

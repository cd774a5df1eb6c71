use super::traits::Dataset;
use crate::config::check_split_fraction;
use crate::mode::Mode;
use crate::samplers::SplitView;
use log::debug;
use scanseg_core::ScanSegError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the dataset root holding the scan images.
pub const SCANS_DIR: &str = "scans";
/// Subdirectory of the dataset root holding the label images.
pub const LABELS_DIR: &str = "labels";

/// The scan and label file behind one sample index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePaths {
    pub image: PathBuf,
    pub label: PathBuf,
}

/// Filename-paired view of a dataset root plus its train/test boundary.
///
/// `images[i]` and `labels[i]` always share a filename. Pairing does not check
/// that the label file exists; a missing label surfaces as a
/// `ScanSegError::SampleLoad` when that index is produced.
///
/// The index is immutable after construction and can be shared between
/// producers (typically behind an `Arc`).
#[derive(Debug, Clone)]
pub struct SampleIndex {
    images: Vec<PathBuf>,
    labels: Vec<PathBuf>,
    split_fraction: f64,
}

impl SampleIndex {
    /// Lists `root/scans` and pairs every file with `root/labels/<same name>`.
    ///
    /// Filenames are sorted so the train/test split does not depend on the
    /// platform's directory listing order. Subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// * `ScanSegError::Configuration` if `split_fraction` is not in `(0, 1)`.
    /// * `ScanSegError::DatasetNotFound` if either subdirectory is missing or unreadable.
    pub fn build<P: AsRef<Path>>(root: P, split_fraction: f64) -> Result<Self, ScanSegError> {
        check_split_fraction(split_fraction)?;
        let root = root.as_ref();
        let scans_dir = root.join(SCANS_DIR);
        let labels_dir = root.join(LABELS_DIR);

        let names = list_sample_names(&scans_dir)?;
        // Only the listing is required; label files themselves are checked at load time.
        fs::read_dir(&labels_dir).map_err(|e| ScanSegError::DatasetNotFound {
            path: labels_dir.clone(),
            reason: e.to_string(),
        })?;

        let images = names.iter().map(|n| scans_dir.join(n)).collect();
        let labels = names.iter().map(|n| labels_dir.join(n)).collect();
        let index = Self {
            images,
            labels,
            split_fraction,
        };
        debug!(
            "SampleIndex: {} samples under {:?}, train boundary {}",
            index.len(),
            root,
            index.train_boundary()
        );
        Ok(index)
    }

    /// Builds an index from explicit, positionally paired path lists.
    ///
    /// # Errors
    ///
    /// Returns `ScanSegError::Configuration` if the lists differ in length or
    /// `split_fraction` is not in `(0, 1)`.
    pub fn from_pairs(
        images: Vec<PathBuf>,
        labels: Vec<PathBuf>,
        split_fraction: f64,
    ) -> Result<Self, ScanSegError> {
        check_split_fraction(split_fraction)?;
        if images.len() != labels.len() {
            return Err(ScanSegError::Configuration(format!(
                "{} image paths but {} label paths",
                images.len(),
                labels.len()
            )));
        }
        Ok(Self {
            images,
            labels,
            split_fraction,
        })
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn labels(&self) -> &[PathBuf] {
        &self.labels
    }

    pub fn split_fraction(&self) -> f64 {
        self.split_fraction
    }

    /// First test index: `len - floor(len * split_fraction)`.
    ///
    /// Floor (not round) keeps at least `floor(len * split_fraction)` samples in
    /// the test partition as the dataset grows.
    pub fn train_boundary(&self) -> usize {
        let total = self.len();
        let held_out = (total as f64 * self.split_fraction).floor() as usize;
        total - held_out.min(total)
    }

    /// Index range walked in `mode`.
    pub fn view_for(&self, mode: Mode) -> SplitView {
        let boundary = self.train_boundary();
        let (start, end) = match mode {
            Mode::Train => (0, boundary),
            Mode::Test => (boundary, self.len()),
        };
        SplitView::new(start, end).unwrap_or_default()
    }
}

impl Dataset for SampleIndex {
    type Item = SamplePaths;

    fn get(&self, index: usize) -> Result<Self::Item, ScanSegError> {
        match (self.images.get(index), self.labels.get(index)) {
            (Some(image), Some(label)) => Ok(SamplePaths {
                image: image.clone(),
                label: label.clone(),
            }),
            _ => Err(ScanSegError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.images.len()
    }
}

fn list_sample_names(dir: &Path) -> Result<Vec<OsString>, ScanSegError> {
    let not_found = |e: std::io::Error| ScanSegError::DatasetNotFound {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(not_found)? {
        let entry = entry.map_err(not_found)?;
        if entry.file_type().map_err(not_found)?.is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "sample_index_test.rs"]
mod tests;

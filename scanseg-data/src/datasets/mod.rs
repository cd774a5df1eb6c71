pub mod traits;
pub mod sample_index;

pub use traits::Dataset;
pub use sample_index::{SampleIndex, SamplePaths, LABELS_DIR, SCANS_DIR};

//! Shared building blocks for the scanseg workspace: the error taxonomy and
//! the `Raster` array handed to training loops.

pub mod error;
pub mod raster;

pub use error::ScanSegError;
pub use raster::Raster;

use scanseg_core::ScanSegError;

/// Indexed, finite collection of sample records.
pub trait Dataset {
    type Item: Send + 'static;

    /// Record at position `index`, or `ScanSegError::IndexOutOfBounds` past the end.
    fn get(&self, index: usize) -> Result<Self::Item, ScanSegError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

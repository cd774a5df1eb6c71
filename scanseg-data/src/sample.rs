use scanseg_core::Raster;

/// One produced training sample.
///
/// `image` holds values in `[0, 1]`; `label` holds the raw label pixel values.
/// Both share the same shape up to the channel axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Dataset index the sample was produced from.
    pub index: usize,
    pub image: Raster,
    pub label: Raster,
}

impl Sample {
    pub fn into_pair(self) -> (Raster, Raster) {
        (self.image, self.label)
    }
}

// scanseg-data/src/augment/options.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Mirror applied to the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    /// Left-right mirror.
    Horizontal,
    /// Top-bottom mirror.
    Vertical,
}

impl Flip {
    pub const ALL: [Flip; 3] = [Flip::None, Flip::Horizontal, Flip::Vertical];
}

/// Centered square crop, resized back to the full edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zoom {
    #[default]
    None,
    Crop95,
    Crop90,
}

impl Zoom {
    pub const ALL: [Zoom; 3] = [Zoom::None, Zoom::Crop95, Zoom::Crop90];

    /// Fraction of the edge kept by the crop window.
    pub fn ratio(self) -> f64 {
        match self {
            Zoom::None => 1.0,
            Zoom::Crop95 => 0.95,
            Zoom::Crop90 => 0.9,
        }
    }
}

/// Counter-clockwise rotation. 270 degrees is not part of the option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
}

impl Rotation {
    pub const ALL: [Rotation; 3] = [Rotation::None, Rotation::Quarter, Rotation::Half];

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
            Rotation::Half => 180,
        }
    }
}

/// Gamma exponents drawn when gamma correction is enabled.
pub const GAMMA_CHOICES: [f32; 2] = [1.0, 0.8];

/// The augmentation choices for one sample.
///
/// Drawn once, then applied to the image and to its label so both receive the
/// same geometry. `gamma` is photometric and only ever applied to the image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AugmentOptions {
    pub flip: Flip,
    pub zoom: Zoom,
    pub rotation: Rotation,
    /// `None` skips the gamma step entirely.
    pub gamma: Option<f32>,
}

impl AugmentOptions {
    pub fn new(flip: Flip, zoom: Zoom, rotation: Rotation) -> Self {
        Self {
            flip,
            zoom,
            rotation,
            gamma: None,
        }
    }

    /// Leaves the sample untouched apart from the resize and normalization.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Draws each geometric choice uniformly from its three options.
    /// When `gamma_correction` is set, gamma is drawn uniformly from [`GAMMA_CHOICES`].
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, gamma_correction: bool) -> Self {
        let flip = Flip::ALL[rng.gen_range(0..Flip::ALL.len())];
        let zoom = Zoom::ALL[rng.gen_range(0..Zoom::ALL.len())];
        let rotation = Rotation::ALL[rng.gen_range(0..Rotation::ALL.len())];
        let gamma = if gamma_correction {
            Some(GAMMA_CHOICES[rng.gen_range(0..GAMMA_CHOICES.len())])
        } else {
            None
        };
        Self {
            flip,
            zoom,
            rotation,
            gamma,
        }
    }
}

/// Supplies the augmentation options for each produced sample.
pub trait OptionSource: Debug + Send {
    fn draw(&mut self) -> AugmentOptions;
}

/// Draws fresh options per sample from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomOptions<R: Rng> {
    rng: R,
    gamma_correction: bool,
}

impl<R: Rng> RandomOptions<R> {
    pub fn new(rng: R, gamma_correction: bool) -> Self {
        Self {
            rng,
            gamma_correction,
        }
    }

    pub fn gamma_correction(&self) -> bool {
        self.gamma_correction
    }
}

impl RandomOptions<StdRng> {
    /// Seeded when `seed` is given, otherwise seeded from system entropy.
    pub fn from_seed(seed: Option<u64>, gamma_correction: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, gamma_correction)
    }
}

impl<R: Rng + Debug + Send> OptionSource for RandomOptions<R> {
    fn draw(&mut self) -> AugmentOptions {
        AugmentOptions::sample(&mut self.rng, self.gamma_correction)
    }
}

/// Returns the same options for every sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedOptions(pub AugmentOptions);

impl OptionSource for FixedOptions {
    fn draw(&mut self) -> AugmentOptions {
        self.0
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;

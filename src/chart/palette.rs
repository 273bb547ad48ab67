//! Chart color palettes
//!
//! Two strategies share one entry point:
//! - **Deterministic**: cycles a fixed base palette of 10 background/border
//!   pairs, so re-rendering the same chart gives the same colors.
//! - **Randomized**: draws each RGB channel uniformly from `[0, 255]` with
//!   alpha fixed at 0.7. The random source is injected so tests can pin it.

use crate::constants::{
    BASE_BACKGROUND_ALPHA, BASE_BORDER_ALPHA, BASE_PALETTE_LEN, BASE_PALETTE_RGB,
    RANDOM_BACKGROUND_ALPHA,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An RGBA color rendered as CSS `rgba(r, g, b, a)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fill and stroke color for one data point (or a whole series)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
    pub background: Rgba,
    pub border: Rgba,
}

/// Ordered colors, one entry per requested slot
pub type Palette = Vec<PaletteEntry>;

/// How colors are chosen
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Deterministic,
    Randomized,
}

/// Entry `index` of the fixed base palette
pub fn base_palette_entry(index: usize) -> PaletteEntry {
    let (r, g, b) = BASE_PALETTE_RGB[index % BASE_PALETTE_LEN];
    PaletteEntry {
        background: Rgba::new(r, g, b, BASE_BACKGROUND_ALPHA),
        border: Rgba::new(r, g, b, BASE_BORDER_ALPHA),
    }
}

/// `count` colors cycling through the base palette
pub fn deterministic_palette(count: usize) -> Palette {
    (0..count).map(base_palette_entry).collect()
}

/// `count` random colors drawn from `rng`.
///
/// The border keeps the fill's channels at full opacity.
pub fn randomized_palette<R: RngCore>(count: usize, rng: &mut R) -> Palette {
    (0..count)
        .map(|_| {
            let (r, g, b) = (rng.r#gen(), rng.r#gen(), rng.r#gen());
            let background = Rgba::new(r, g, b, RANDOM_BACKGROUND_ALPHA);
            PaletteEntry {
                background,
                border: background.with_alpha(BASE_BORDER_ALPHA),
            }
        })
        .collect()
}

/// Produces palettes in either mode, owning the random source.
#[derive(Debug)]
pub struct PaletteGenerator<R: RngCore = StdRng> {
    rng: R,
}

impl PaletteGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator with a reproducible random sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PaletteGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, count: usize, mode: PaletteMode) -> Palette {
        match mode {
            PaletteMode::Deterministic => deterministic_palette(count),
            PaletteMode::Randomized => randomized_palette(count, &mut self.rng),
        }
    }
}

//! Random color draws from a named palette.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::color::ColorValue;
use crate::names::ColorNames;

/// Capability to draw a fresh color.
pub trait ColorSource {
    fn next_color(&mut self) -> ColorValue;
}

impl<F> ColorSource for F
where
    F: FnMut() -> ColorValue,
{
    fn next_color(&mut self) -> ColorValue {
        self()
    }
}

/// Uniform draws over the entries of a [`ColorNames`] table.
#[derive(Debug)]
pub struct PaletteSource<'a, R = StdRng> {
    names: &'a ColorNames,
    rng: R,
}

impl<'a> PaletteSource<'a, StdRng> {
    /// Source seeded from operating-system entropy.
    pub fn from_entropy(names: &'a ColorNames) -> Self {
        Self::with_rng(names, StdRng::from_entropy())
    }

    /// Reproducible source.
    pub fn seeded(names: &'a ColorNames, seed: u64) -> Self {
        Self::with_rng(names, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> PaletteSource<'a, R> {
    pub fn with_rng(names: &'a ColorNames, rng: R) -> Self {
        Self { names, rng }
    }
}

impl<R: Rng> ColorSource for PaletteSource<'_, R> {
    fn next_color(&mut self) -> ColorValue {
        let entry = self
            .names
            .entries()
            .choose(&mut self.rng)
            .expect("ColorNames::new rejects empty tables");
        ColorValue::new(entry.rgb, entry.name.clone())
    }
}

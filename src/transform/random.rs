//! Randomness seam for the pipeline.
//!
//! Every probabilistic decision draws from a [`RandomSource`] passed in by the
//! caller. Any [`rand::Rng`] is a source, so a seeded
//! [`StdRng`](rand::rngs::StdRng) gives reproducible output:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use restyle::transform::{TransformConfig, transform};
//!
//! let config = TransformConfig::default().with_strength(90);
//! let text = "Good tools help a lot. Use them.";
//! let a = transform(text, &config, &mut StdRng::seed_from_u64(7));
//! let b = transform(text, &config, &mut StdRng::seed_from_u64(7));
//! assert_eq!(a, b);
//! ```

use std::collections::VecDeque;

use rand::Rng;

/// A source of uniform draws.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// A source that replays fixed draws, for forcing specific branches.
///
/// Unit draws come from the script in order; once it runs out, `fallback` is
/// returned forever. Index draws have their own script, clamped to the
/// requested range, and return 0 once it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    units: VecDeque<f64>,
    fallback: f64,
    indices: VecDeque<usize>,
}

impl ScriptedSource {
    /// A source that returns `fallback` for every unit draw and index 0.
    pub fn constant(fallback: f64) -> Self {
        ScriptedSource {
            units: VecDeque::new(),
            fallback,
            indices: VecDeque::new(),
        }
    }

    /// A source that replays `units` and then returns `fallback`.
    pub fn new(units: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        ScriptedSource {
            units: units.into_iter().collect(),
            fallback,
            indices: VecDeque::new(),
        }
    }

    /// Replay `indices` for the next index draws.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices = indices.into_iter().collect();
        self
    }

    /// Number of scripted unit draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(self.fallback)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .map_or(0, |index| index.min(len.saturating_sub(1)))
    }
}

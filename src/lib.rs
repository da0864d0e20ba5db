//! # Restyle
//!
//! A rule-based prose restyler. Restyle rewrites a block of text with
//! controlled lexical and structural variation while keeping its meaning:
//!
//! - Synonym substitution from a small, meaning-preserving table
//! - Purpose-conditioned hedging phrases and emphasis
//! - Regrouping of sentences into short paragraphs
//!
//! There is no model behind it: every change is a randomized rule, and the
//! randomness is supplied by the caller, so a seeded generator gives
//! reproducible output.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use restyle::prelude::*;
//!
//! let config = TransformConfig::new(80, true, Purpose::Blog);
//! let mut rng = StdRng::seed_from_u64(42);
//! let output = transform("This is a good start. It helps.", &config, &mut rng);
//! assert!(compute_stats(&output).sentence_count >= 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod transform;

pub mod prelude {
    pub use crate::analysis::synonym::SynonymDictionary;
    pub use crate::error::{RestyleError, Result};
    pub use crate::transform::{
        Humanizer, Purpose, RandomSource, ScriptedSource, Strength, TextStats, TransformConfig,
        compute_stats, transform,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! The restyling pipeline and its components.
//!
//! - [`substitute`] swaps at most one word per sentence for a synonym
//! - [`augment`] adds purpose-specific hedges and emphasis
//! - [`paragraph`] regroups sentences into short paragraphs
//! - [`engine`] composes them and computes text statistics

pub mod augment;
pub mod config;
pub mod engine;
pub mod paragraph;
pub mod random;
pub mod substitute;

// Re-export commonly used types
pub use config::{Purpose, Strength, TransformConfig};
pub use engine::{Humanizer, TextStats, compute_stats, transform};
pub use random::{RandomSource, ScriptedSource};

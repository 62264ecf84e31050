//! Scoring engine: per-headline classification and batch aggregation.
//!
//! Both operations are pure functions of their inputs and the lexicon. Nothing
//! here blocks, allocates shared state, or fails.

pub mod batch;
pub mod classifier;

pub use batch::{market_index, process, NEUTRAL_MIDPOINT, SENSITIVITY_GAIN};
pub use classifier::{classify, Classification};

//! MoodBoard core: lexicon, headline classifier, batch aggregation and feed providers.
//!
//! This crate contains the sentiment scoring engine:
//! - Weighted keyword lexicon split into bullish and bearish partitions
//! - Per-headline classifier (substring matching, signed score, polarity)
//! - Batch processor producing classified headlines and a bounded market index
//! - Gauge band mapping for display
//! - Feed providers (HTTP, file) and the static fallback dataset
//!
//! The engine never performs I/O. Only the `feed` module touches the network
//! or the filesystem.

pub mod domain;
pub mod engine;
pub mod feed;
pub mod gauge;
pub mod lexicon;

pub use domain::{BatchOutcome, ClassifiedHeadline, Headline, HeadlineId, MarketReport, Polarity, RawHeadline};
pub use engine::{classify, market_index, process, Classification};
pub use gauge::GaugeBand;
pub use lexicon::{Lexicon, LexiconEntry, LexiconError, Partition};

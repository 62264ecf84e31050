//! Domain types for MoodBoard

pub mod headline;
pub mod polarity;
pub mod report;

pub use headline::{ClassifiedHeadline, Headline, HeadlineId, RawHeadline, LINK_PLACEHOLDER};
pub use polarity::Polarity;
pub use report::{BatchOutcome, MarketReport};

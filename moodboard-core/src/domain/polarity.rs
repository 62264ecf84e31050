//! Polarity, the directional label of a headline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Net score at or above which a headline is bullish.
pub const BULLISH_THRESHOLD: i32 = 2;

/// Net score at or below which a headline is bearish.
pub const BEARISH_THRESHOLD: i32 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Bullish,
    Bearish,
    Neutral,
}

impl Polarity {
    /// Classify a net score. The two thresholds are disjoint, so a single
    /// match of weight ±1 or two cancelling matches stay neutral.
    pub fn from_score(score: i32) -> Self {
        if score >= BULLISH_THRESHOLD {
            Polarity::Bullish
        } else if score <= BEARISH_THRESHOLD {
            Polarity::Bearish
        } else {
            Polarity::Neutral
        }
    }

    /// Card label shown next to a headline.
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Bullish => "利多",
            Polarity::Bearish => "利空",
            Polarity::Neutral => "中立",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Bullish => write!(f, "bullish"),
            Polarity::Bearish => write!(f, "bearish"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

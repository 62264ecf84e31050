//! Aggregate report for one batch.

use serde::{Deserialize, Serialize};

use super::headline::ClassifiedHeadline;
use super::polarity::Polarity;
use crate::gauge::GaugeBand;

/// Market index of a batch with no net evidence.
pub const NEUTRAL_INDEX: u8 = 50;

/// Polarity tally and normalized market index.
///
/// Recomputed from scratch on every batch; there is no incremental update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReport {
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub total_score: i64,
    pub market_index: u8,
}

impl Default for MarketReport {
    fn default() -> Self {
        Self {
            bullish_count: 0,
            bearish_count: 0,
            neutral_count: 0,
            total_score: 0,
            market_index: NEUTRAL_INDEX,
        }
    }
}

impl MarketReport {
    /// Number of headlines tallied.
    pub fn total(&self) -> usize {
        self.bullish_count + self.bearish_count + self.neutral_count
    }

    pub fn count(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Bullish => self.bullish_count,
            Polarity::Bearish => self.bearish_count,
            Polarity::Neutral => self.neutral_count,
        }
    }

    pub fn gauge_band(&self) -> GaugeBand {
        GaugeBand::from_index(self.market_index)
    }
}

/// Result of processing a non-empty batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Classified headlines in input order.
    pub headlines: Vec<ClassifiedHeadline>,
    pub report: MarketReport,
}

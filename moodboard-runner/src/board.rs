//! The mood board: the last successfully scored batch.
//!
//! An empty batch never replaces what is on the board.

use chrono::{DateTime, Utc};
use moodboard_core::feed::FeedSource;
use moodboard_core::{BatchOutcome, ClassifiedHeadline, GaugeBand, MarketReport};
use serde::{Deserialize, Serialize};

/// Everything needed to render the dashboard for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub headlines: Vec<ClassifiedHeadline>,
    pub report: MarketReport,
    pub source: FeedSource,
    pub batch_hash: String,
    pub updated_at: DateTime<Utc>,
}

impl BoardSnapshot {
    pub fn new(
        outcome: BatchOutcome,
        source: FeedSource,
        batch_hash: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            headlines: outcome.headlines,
            report: outcome.report,
            source,
            batch_hash: batch_hash.into(),
            updated_at,
        }
    }

    pub fn gauge_band(&self) -> GaugeBand {
        self.report.gauge_band()
    }
}

#[derive(Debug, Default)]
pub struct MoodBoard {
    current: Option<BoardSnapshot>,
}

impl MoodBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.current.as_ref()
    }

    /// Report of the current snapshot, or the neutral report before the first batch.
    pub fn report(&self) -> MarketReport {
        self.current
            .as_ref()
            .map(|s| s.report)
            .unwrap_or_default()
    }

    /// Replace the snapshot with `outcome`. Returns false, leaving the board
    /// untouched, when the batch was empty.
    pub fn apply(
        &mut self,
        outcome: Option<BatchOutcome>,
        source: FeedSource,
        batch_hash: &str,
        updated_at: DateTime<Utc>,
    ) -> bool {
        match outcome {
            Some(outcome) => {
                self.current = Some(BoardSnapshot::new(outcome, source, batch_hash, updated_at));
                true
            }
            None => false,
        }
    }

    pub fn into_snapshot(self) -> Option<BoardSnapshot> {
        self.current
    }
}

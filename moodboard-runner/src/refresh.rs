//! One refresh cycle: load, score, update the board.

use chrono::Utc;
use moodboard_core::feed::{FeedProvider, FeedSource};
use moodboard_core::{process, BatchOutcome, Lexicon, RawHeadline};
use rayon::prelude::*;

use crate::board::MoodBoard;
use crate::loader::{load_headlines, LoadError, LoadOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The board now shows this batch.
    Updated {
        source: FeedSource,
        headline_count: usize,
        provider_error: Option<String>,
    },
    /// The batch was empty; the board keeps its previous snapshot.
    Unchanged { source: FeedSource },
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated { .. })
    }
}

pub fn refresh(
    board: &mut MoodBoard,
    lexicon: &Lexicon,
    provider: Option<&dyn FeedProvider>,
    opts: &LoadOptions,
) -> Result<RefreshOutcome, LoadError> {
    let batch = load_headlines(provider, opts)?;
    let outcome = process(lexicon, &batch.records);
    let headline_count = batch.records.len();

    if board.apply(outcome, batch.source, &batch.batch_hash, Utc::now()) {
        tracing::info!(
            source = ?batch.source,
            headlines = headline_count,
            index = board.report().market_index,
            "board updated"
        );
        Ok(RefreshOutcome::Updated {
            source: batch.source,
            headline_count,
            provider_error: batch.provider_error,
        })
    } else {
        tracing::info!(source = ?batch.source, "empty batch, board unchanged");
        Ok(RefreshOutcome::Unchanged {
            source: batch.source,
        })
    }
}

/// Score independent batches in parallel. Output order matches input order.
pub fn score_batches(lexicon: &Lexicon, batches: &[Vec<RawHeadline>]) -> Vec<Option<BatchOutcome>> {
    batches
        .par_iter()
        .map(|records| process(lexicon, records))
        .collect()
}

//! Per-headline classifier.

use serde::{Deserialize, Serialize};

use crate::domain::Polarity;
use crate::lexicon::{Lexicon, LexiconEntry};

/// Evidence gathered from one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub score: i32,
    pub polarity: Polarity,
    /// Positive-partition matches first, then negative, each in lexicon order.
    pub matched_tokens: Vec<String>,
}

/// Score a title against the lexicon.
///
/// Every entry whose token occurs anywhere in `title` contributes its weight.
/// There is no early exit and no overlap suppression: a token contained in a
/// longer matched token counts again.
pub fn classify(lexicon: &Lexicon, title: &str) -> Classification {
    let mut score = 0i32;
    let mut matched_tokens = Vec::new();

    scan(lexicon.positive(), title, &mut score, &mut matched_tokens);
    scan(lexicon.negative(), title, &mut score, &mut matched_tokens);

    Classification {
        score,
        polarity: Polarity::from_score(score),
        matched_tokens,
    }
}

fn scan(entries: &[LexiconEntry], title: &str, score: &mut i32, matched: &mut Vec<String>) {
    for entry in entries {
        if title.contains(entry.token.as_str()) {
            *score = score.saturating_add(entry.weight);
            matched.push(entry.token.clone());
        }
    }
}

//! Property tests for scoring invariants.
//!
//! Uses proptest to verify:
//! 1. Titles with no lexicon token score zero and stay neutral
//! 2. Score equals the sum of every matching entry's weight, regardless of scan order
//! 3. Polarity follows the threshold law
//! 4. Batch processing is idempotent and its tallies partition the batch
//! 5. Market index is the clamped linear normalization of the total score

use proptest::prelude::*;
use moodboard_core::{classify, market_index, process, Lexicon, LexiconEntry, Polarity, RawHeadline};

// ── Strategies (proptest) ────────────────────────────────────────────

/// ASCII-only text: the built-in lexicon is entirely CJK, so nothing matches.
fn arb_ascii_title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?%-]{0,60}"
}

/// Titles stitched together from lexicon tokens and CJK filler.
fn arb_mixed_title() -> impl Strategy<Value = String> {
    let lexicon = Lexicon::builtin();
    let tokens: Vec<String> = lexicon.entries().map(|e| e.token.clone()).collect();
    let fillers = vec![
        "台積電".to_string(),
        "焦點股》".to_string(),
        "　".to_string(),
        "外資".to_string(),
        "市場".to_string(),
        "！".to_string(),
    ];
    let piece = prop_oneof![
        3 => prop::sample::select(tokens),
        2 => prop::sample::select(fillers),
    ];
    prop::collection::vec(piece, 0..8).prop_map(|parts| parts.concat())
}

fn arb_batch() -> impl Strategy<Value = Vec<RawHeadline>> {
    prop::collection::vec(
        (arb_mixed_title(), prop::option::of("[a-z]{2,8}"), any::<bool>()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(title, name, has_link)| {
                let mut raw = RawHeadline::new("feed", title);
                raw.source_name = name;
                if has_link {
                    raw.link = Some("https://news.example/1".into());
                }
                raw
            })
            .collect()
    })
}

fn expected_score(lexicon: &Lexicon, title: &str) -> i32 {
    lexicon
        .entries()
        .filter(|e| title.contains(e.token.as_str()))
        .map(|e| e.weight)
        .sum()
}

fn reversed(lexicon: &Lexicon) -> Lexicon {
    let pos: Vec<LexiconEntry> = lexicon.positive().iter().rev().cloned().collect();
    let neg: Vec<LexiconEntry> = lexicon.negative().iter().rev().cloned().collect();
    Lexicon::from_partitions(pos, neg).unwrap()
}

// ── 1. No match → zero ───────────────────────────────────────────────

proptest! {
    #[test]
    fn unmatched_titles_score_zero(title in arb_ascii_title()) {
        let c = classify(Lexicon::builtin(), &title);
        prop_assert_eq!(c.score, 0);
        prop_assert_eq!(c.polarity, Polarity::Neutral);
        prop_assert!(c.matched_tokens.is_empty());
    }
}

// ── 2. Score is the sum of matching weights ──────────────────────────

proptest! {
    #[test]
    fn score_is_sum_of_matching_weights(title in arb_mixed_title()) {
        let lexicon = Lexicon::builtin();
        let c = classify(lexicon, &title);
        prop_assert_eq!(c.score, expected_score(lexicon, &title));
    }

    #[test]
    fn score_is_independent_of_scan_order(title in arb_mixed_title()) {
        let lexicon = Lexicon::builtin();
        let forward = classify(lexicon, &title);
        let backward = classify(&reversed(lexicon), &title);
        prop_assert_eq!(forward.score, backward.score);
        prop_assert_eq!(forward.polarity, backward.polarity);
        prop_assert_eq!(forward.matched_tokens.len(), backward.matched_tokens.len());
    }

    #[test]
    fn matched_tokens_list_positive_before_negative(title in arb_mixed_title()) {
        let lexicon = Lexicon::builtin();
        let c = classify(lexicon, &title);
        let weights: Vec<i32> = c
            .matched_tokens
            .iter()
            .map(|t| lexicon.entries().find(|e| &e.token == t).unwrap().weight)
            .collect();
        if let Some(first_negative) = weights.iter().position(|w| *w < 0) {
            prop_assert!(weights[first_negative..].iter().all(|w| *w < 0));
        }
    }
}

// ── 3. Threshold law ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn polarity_follows_thresholds(title in arb_mixed_title()) {
        let c = classify(Lexicon::builtin(), &title);
        prop_assert_eq!(c.polarity == Polarity::Bullish, c.score >= 2);
        prop_assert_eq!(c.polarity == Polarity::Bearish, c.score <= -2);
        prop_assert_eq!(c.polarity == Polarity::Neutral, (-1..=1).contains(&c.score));
    }
}

// ── 4. Batch idempotence and partition ───────────────────────────────

proptest! {
    #[test]
    fn process_is_idempotent(batch in arb_batch()) {
        let lexicon = Lexicon::builtin();
        prop_assert_eq!(process(lexicon, &batch), process(lexicon, &batch));
    }

    #[test]
    fn tallies_partition_the_batch(batch in arb_batch()) {
        let lexicon = Lexicon::builtin();
        match process(lexicon, &batch) {
            None => prop_assert!(batch.is_empty()),
            Some(outcome) => {
                let r = outcome.report;
                prop_assert_eq!(r.bullish_count + r.bearish_count + r.neutral_count, batch.len());
                prop_assert_eq!(outcome.headlines.len(), batch.len());
                let total: i64 = outcome.headlines.iter().map(|h| i64::from(h.score)).sum();
                prop_assert_eq!(r.total_score, total);
                prop_assert_eq!(r.market_index, market_index(total));
            }
        }
    }
}

// ── 5. Normalization clamp ───────────────────────────────────────────

proptest! {
    #[test]
    fn market_index_is_clamped_linear(total in -10_000i64..10_000) {
        let expected = (50 + 3 * total).clamp(0, 100);
        prop_assert_eq!(i64::from(market_index(total)), expected);
    }
}

//! Batch processor: classify every headline, tally polarities, normalize.

use crate::domain::{BatchOutcome, ClassifiedHeadline, HeadlineId, MarketReport, Polarity, RawHeadline};
use crate::lexicon::Lexicon;

use super::classifier::classify;

/// Market index when the batch carries no net evidence.
pub const NEUTRAL_MIDPOINT: i64 = 50;

/// Index points per unit of aggregate score.
pub const SENSITIVITY_GAIN: i64 = 3;

/// Classify a batch and aggregate it into a [`MarketReport`].
///
/// Returns `None` for an empty batch. Callers treat that as a no-op and keep
/// whatever they displayed before; it is not an empty result.
///
/// Records are classified independently, in input order, and each one gets
/// its batch position as its id.
pub fn process(lexicon: &Lexicon, records: &[RawHeadline]) -> Option<BatchOutcome> {
    if records.is_empty() {
        return None;
    }

    let mut report = MarketReport::default();
    let mut headlines = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let headline = record.normalize();
        let classification = classify(lexicon, &headline.title);

        match classification.polarity {
            Polarity::Bullish => report.bullish_count += 1,
            Polarity::Bearish => report.bearish_count += 1,
            Polarity::Neutral => report.neutral_count += 1,
        }
        report.total_score += i64::from(classification.score);

        headlines.push(ClassifiedHeadline {
            id: HeadlineId(index),
            source: headline.source,
            display_name: headline.display_name,
            title: headline.title,
            link: headline.link,
            timestamp: headline.timestamp,
            score: classification.score,
            polarity: classification.polarity,
            matched_tokens: classification.matched_tokens,
        });
    }

    report.market_index = market_index(report.total_score);

    Some(BatchOutcome { headlines, report })
}

/// `clamp(50 + 3 * total_score, 0, 100)`.
///
/// Integer arithmetic, so rounding is the identity.
pub fn market_index(total_score: i64) -> u8 {
    let raw = NEUTRAL_MIDPOINT.saturating_add(total_score.saturating_mul(SENSITIVITY_GAIN));
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LINK_PLACEHOLDER;

    #[test]
    fn empty_batch_is_a_no_op() {
        assert!(process(Lexicon::builtin(), &[]).is_none());
    }

    #[test]
    fn index_normalization_examples() {
        assert_eq!(market_index(0), 50);
        assert_eq!(market_index(5), 65);
        assert_eq!(market_index(-5), 35);
        assert_eq!(market_index(16), 98);
        assert_eq!(market_index(17), 100);
        assert_eq!(market_index(20), 100);
        assert_eq!(market_index(-17), 0);
        assert_eq!(market_index(-20), 0);
        assert_eq!(market_index(i64::MAX), 100);
        assert_eq!(market_index(i64::MIN), 0);
    }

    #[test]
    fn ids_follow_input_order() {
        let records = vec![
            RawHeadline::new("a", "大漲"),
            RawHeadline::new("b", "重挫"),
            RawHeadline::new("c", "平盤"),
        ];
        let outcome = process(Lexicon::builtin(), &records).unwrap();
        let ids: Vec<usize> = outcome.headlines.iter().map(|h| h.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let sources: Vec<&str> = outcome.headlines.iter().map(|h| h.source.as_str()).collect();
        assert_eq!(sources, vec!["a", "b", "c"]);
    }

    #[test]
    fn tallies_and_sums() {
        let records = vec![
            RawHeadline::new("a", "大漲"),
            RawHeadline::new("b", "重挫"),
            RawHeadline::new("c", "平盤"),
            RawHeadline::new("d", "漲停"),
        ];
        let outcome = process(Lexicon::builtin(), &records).unwrap();
        let r = outcome.report;
        assert_eq!((r.bullish_count, r.bearish_count, r.neutral_count), (2, 1, 1));
        assert_eq!(r.total_score, 3);
        assert_eq!(r.market_index, 59);
    }

    #[test]
    fn defaults_are_filled_before_classification() {
        let records = vec![RawHeadline {
            source: Some("ltn".into()),
            ..RawHeadline::default()
        }];
        let outcome = process(Lexicon::builtin(), &records).unwrap();
        let h = &outcome.headlines[0];
        assert_eq!(h.display_name, "ltn");
        assert_eq!(h.link, LINK_PLACEHOLDER);
        assert_eq!(h.title, "");
        assert_eq!(h.polarity, Polarity::Neutral);
        assert_eq!(outcome.report.neutral_count, 1);
        assert_eq!(outcome.report.market_index, 50);
    }
}

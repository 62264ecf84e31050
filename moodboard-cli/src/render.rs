//! Plain-text dashboard rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Local, NaiveDateTime};
use moodboard_core::{Classification, ClassifiedHeadline, Lexicon, MarketReport, Polarity};
use moodboard_runner::BoardSnapshot;

const GAUGE_WIDTH: usize = 40;
const NO_DATA: &str = "暫無新聞資料";
const NEUTRAL_CHIP: &str = "#觀望中性";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_board(snapshot: Option<&BoardSnapshot>) -> String {
    let Some(snapshot) = snapshot else {
        return format!("{NO_DATA}\n");
    };

    let mut out = String::new();
    out.push_str(&render_gauge(&snapshot.report));
    out.push_str(&render_tally(&snapshot.report));
    let _ = writeln!(
        out,
        "資料來源: {}   更新時間: {}",
        snapshot.source.label(),
        snapshot.updated_at.with_timezone(&Local).format("%H:%M:%S")
    );
    let _ = writeln!(out, "共 {} 則新聞", snapshot.headlines.len());

    for headline in &snapshot.headlines {
        out.push('\n');
        out.push_str(&render_card(headline));
    }
    out
}

fn render_gauge(report: &MarketReport) -> String {
    let band = report.gauge_band();
    let filled = usize::from(report.market_index) * GAUGE_WIDTH / 100;
    format!(
        "市場情緒指數 {:>3} / 100   {}   指針 {:+}°\n[{}{}]\n",
        report.market_index,
        band.label(),
        band.needle_degrees(),
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled),
    )
}

fn render_tally(report: &MarketReport) -> String {
    format!(
        "{} {}   {} {}   {} {}\n",
        Polarity::Bullish.label(),
        report.bullish_count,
        Polarity::Bearish.label(),
        report.bearish_count,
        Polarity::Neutral.label(),
        report.neutral_count,
    )
}

fn render_card(headline: &ClassifiedHeadline) -> String {
    let time = card_time(&headline.timestamp);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{} {}] {} {}",
        headline.polarity.label(),
        signed_score(headline.score),
        headline.display_name,
        time
    );
    let _ = writeln!(out, "  {}", headline.title);
    let _ = writeln!(out, "  {}", token_chips(&headline.matched_tokens));
    let _ = writeln!(out, "  {}", headline.link);
    out
}

/// `HH:MM` from a feed timestamp, or empty when it does not parse.
///
/// Plain `YYYY-MM-DD HH:MM:SS` stamps are shown as written. RFC 3339 stamps
/// carry an offset and are shown in local time.
pub fn card_time(timestamp: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        return dt.format("%H:%M").to_string();
    }
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

pub fn signed_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

pub fn token_chips(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return NEUTRAL_CHIP.to_string();
    }
    tokens
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_classification(title: &str, classification: &Classification) -> String {
    format!(
        "{}\n[{} {}] {}\n",
        title,
        classification.polarity.label(),
        signed_score(classification.score),
        token_chips(&classification.matched_tokens),
    )
}

pub fn render_lexicon(lexicon: &Lexicon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", Polarity::Bullish.label(), lexicon.positive().len());
    for entry in lexicon.positive() {
        let _ = writeln!(out, "  {:+}  {}", entry.weight, entry.token);
    }
    let _ = writeln!(out, "{} ({})", Polarity::Bearish.label(), lexicon.negative().len());
    for entry in lexicon.negative() {
        let _ = writeln!(out, "  {:+}  {}", entry.weight, entry.token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use moodboard_core::feed::{fallback_headlines, FeedSource};
    use moodboard_core::{classify, process};

    fn fallback_snapshot() -> BoardSnapshot {
        let outcome = process(Lexicon::builtin(), &fallback_headlines()).unwrap();
        BoardSnapshot::new(outcome, FeedSource::Fallback, "hash", Utc::now())
    }

    #[test]
    fn no_snapshot_renders_placeholder() {
        assert_eq!(render_board(None), "暫無新聞資料\n");
    }

    #[test]
    fn board_shows_gauge_tally_and_cards() {
        let text = render_board(Some(&fallback_snapshot()));
        assert!(text.starts_with("市場情緒指數  83 / 100   市場樂觀   指針 +45°\n"));
        assert!(text.contains("利多 4   利空 1   中立 5"));
        assert!(text.contains("備用資料 (API連線受阻)"));
        assert!(text.contains("共 10 則新聞"));
        assert!(text.contains("[利多 +4] 自由財經 11:15\n"));
        assert!(text.contains("#打入 #供應鏈 #按讚"));
        assert!(text.contains("[利空 -2] 自由財經 11:15\n"));
        assert!(text.contains("[中立 0] ETtoday 財經 11:15\n"));
    }

    #[test]
    fn gauge_bar_width_is_fixed() {
        for index in [0u8, 50, 83, 100] {
            let report = MarketReport {
                market_index: index,
                ..MarketReport::default()
            };
            let gauge = render_gauge(&report);
            let bar = gauge.lines().nth(1).unwrap();
            assert_eq!(bar.chars().count(), GAUGE_WIDTH + 2, "index {index}");
        }
    }

    #[test]
    fn card_time_extracts_hour_and_minute() {
        assert_eq!(card_time("2025-11-25 11:15:28"), "11:15");
        assert_eq!(card_time(""), "");
        assert_eq!(card_time("11/25 11:15"), "");
    }

    #[test]
    fn card_time_accepts_rfc3339_in_local_time() {
        let stamp = "2025-11-25T03:15:28Z";
        let expected = DateTime::parse_from_rfc3339(stamp)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        assert_eq!(card_time(stamp), expected);
        assert_eq!(card_time("2025-11-25T11:15:28+08:00").len(), 5);
    }

    #[test]
    fn scores_are_signed() {
        assert_eq!(signed_score(3), "+3");
        assert_eq!(signed_score(0), "0");
        assert_eq!(signed_score(-2), "-2");
    }

    #[test]
    fn neutral_chip_when_no_tokens() {
        assert_eq!(token_chips(&[]), "#觀望中性");
    }

    #[test]
    fn classification_line() {
        let c = classify(Lexicon::builtin(), "跌停鎖死 外資賣出");
        let text = render_classification("跌停鎖死 外資賣出", &c);
        assert!(text.contains("[利空 -5] #賣出 #跌停"));
    }

    #[test]
    fn lexicon_listing_has_both_partitions() {
        let text = render_lexicon(Lexicon::builtin());
        assert!(text.starts_with("利多 (27)\n"));
        assert!(text.contains("利空 (24)\n"));
        assert!(text.contains("  +3  創新高"));
        assert!(text.contains("  -3  跌停"));
    }
}

//! Feed provider trait, error types, and response parsing.
//!
//! The FeedProvider trait abstracts over where raw headlines come from (the
//! live HTTP endpoint, a JSON dump on disk) so the runner can swap sources and
//! tests can mock them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::RawHeadline;

/// Structured error types for feed operations.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("feed returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a batch of headlines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    Live,
    File,
    Fallback,
}

impl FeedSource {
    pub fn label(self) -> &'static str {
        match self {
            FeedSource::Live => "LIVE API (即時資料)",
            FeedSource::File => "離線檔案",
            FeedSource::Fallback => "備用資料 (API連線受阻)",
        }
    }
}

/// Trait for headline feeds.
pub trait FeedProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch one batch of raw headlines.
    fn fetch(&self) -> Result<Vec<RawHeadline>, FeedError>;

    /// Provenance tag for batches this provider returns.
    fn source(&self) -> FeedSource {
        FeedSource::Live
    }
}

/// Parse a feed response body.
///
/// Accepts an object carrying a `news` array, or a bare top-level array (the
/// shape of hand-saved dumps). Fields are read leniently: strings pass
/// through, numbers are stringified, anything else counts as missing.
/// Array elements that are not objects are skipped.
pub fn parse_feed_body(body: &str) -> Result<Vec<RawHeadline>, FeedError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FeedError::ResponseFormatChanged(format!("invalid JSON: {e}")))?;

    let items = match &value {
        Value::Object(map) => match map.get("news") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(FeedError::ResponseFormatChanged(
                    "`news` field is not an array".into(),
                ))
            }
            None => {
                return Err(FeedError::ResponseFormatChanged(
                    "missing `news` field".into(),
                ))
            }
        },
        Value::Array(items) => items,
        _ => {
            return Err(FeedError::ResponseFormatChanged(
                "expected an object with a `news` array".into(),
            ))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(_) => records.push(lenient_record(item)),
            other => tracing::warn!(index = i, kind = value_kind(other), "skipping non-object feed entry"),
        }
    }
    Ok(records)
}

fn lenient_record(item: &Value) -> RawHeadline {
    RawHeadline {
        source: text_field(item, "source"),
        source_name: text_field(item, "sourceName").or_else(|| text_field(item, "displayName")),
        title: text_field(item, "title"),
        link: text_field(item, "link"),
        timestamp: text_field(item, "timestamp"),
    }
}

fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_news_object() {
        let body = r##"{"news":[{"source":"ltn","sourceName":"自由財經","title":"大漲","link":"#","timestamp":"2025-11-25 11:15:28"}]}"##;
        let records = parse_feed_body(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_name.as_deref(), Some("自由財經"));
        assert_eq!(records[0].title.as_deref(), Some("大漲"));
    }

    #[test]
    fn parses_bare_array() {
        let records = parse_feed_body(r#"[{"source":"udn","title":"重挫"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].link.is_none());
    }

    #[test]
    fn empty_news_array_is_ok() {
        assert!(parse_feed_body(r#"{"news":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn rejects_missing_news_field() {
        let err = parse_feed_body(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, FeedError::ResponseFormatChanged(_)));
    }

    #[test]
    fn rejects_non_array_news() {
        let err = parse_feed_body(r#"{"news":"down for maintenance"}"#).unwrap_err();
        assert!(matches!(err, FeedError::ResponseFormatChanged(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_feed_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, FeedError::ResponseFormatChanged(_)));
    }

    #[test]
    fn malformed_fields_degrade_per_field() {
        let body = r#"{"news":[{"source":"ltn","title":42,"link":null,"timestamp":1732504528,"sourceName":["x"]}]}"#;
        let records = parse_feed_body(body).unwrap();
        let r = &records[0];
        assert_eq!(r.source.as_deref(), Some("ltn"));
        assert_eq!(r.title.as_deref(), Some("42"));
        assert!(r.link.is_none());
        assert_eq!(r.timestamp.as_deref(), Some("1732504528"));
        assert!(r.source_name.is_none());
    }

    #[test]
    fn skips_non_object_entries() {
        let records = parse_feed_body(r#"{"news":[null, 3, {"title":"反彈"}]}"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("反彈"));
    }

    #[test]
    fn display_name_alias() {
        let records = parse_feed_body(r#"[{"source":"yahoo","displayName":"Yahoo 財經"}]"#).unwrap();
        assert_eq!(records[0].source_name.as_deref(), Some("Yahoo 財經"));
    }
}

//! Headline records in raw feed, normalized and classified form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::polarity::Polarity;

/// Link used when a record arrives without one.
pub const LINK_PLACEHOLDER: &str = "#";

/// A headline as delivered by a feed or the fallback dataset.
///
/// Every field may be missing on the wire. Nothing reads this shape except
/// [`RawHeadline::normalize`], which fills the defaults once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHeadline {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RawHeadline {
    pub fn new(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Fill defaults: display name falls back to the source, link to
    /// [`LINK_PLACEHOLDER`], title to the empty string. Empty strings count as
    /// missing.
    pub fn normalize(&self) -> Headline {
        let source = self.source.clone().unwrap_or_default();
        let display_name = non_empty(&self.source_name).unwrap_or_else(|| source.clone());
        Headline {
            display_name,
            title: non_empty(&self.title).unwrap_or_default(),
            link: non_empty(&self.link).unwrap_or_else(|| LINK_PLACEHOLDER.to_string()),
            timestamp: self.timestamp.clone().unwrap_or_default(),
            source,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// A fully populated headline, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub source: String,
    pub display_name: String,
    pub title: String,
    pub link: String,
    pub timestamp: String,
}

/// Position of a headline within its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadlineId(pub usize);

impl fmt::Display for HeadlineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One classified headline. Created by the batch processor, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedHeadline {
    pub id: HeadlineId,
    pub source: String,
    pub display_name: String,
    pub title: String,
    pub link: String,
    pub timestamp: String,
    pub score: i32,
    pub polarity: Polarity,
    pub matched_tokens: Vec<String>,
}

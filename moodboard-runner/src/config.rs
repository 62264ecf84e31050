//! TOML configuration for refresh runs.
//!
//! ```toml
//! [feed]
//! url = "https://example.com/news"
//! timeout_secs = 15
//! max_retries = 2
//! retry_base_ms = 500
//!
//! [lexicon]
//! path = "config/lexicon.toml"
//!
//! [output]
//! dir = "results"
//! ```
//!
//! Every section and key is optional; missing values take the defaults below.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use moodboard_core::feed::HttpFeedOptions;
use moodboard_core::{Lexicon, LexiconError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Apps Script endpoint aggregating 自由財經, 聯合, Yahoo and ETtoday headlines.
pub const DEFAULT_FEED_URL: &str = "https://script.google.com/macros/s/AKfycbwl67_kmGSwBLy3pRqK2W0DZwLgN3Q7cNCDqPr1sucWvUPEr08lFV6IdGazexDmM6ZEXg/exec";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    pub feed: FeedConfig,
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_base_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 15,
            max_retries: 2,
            retry_base_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Replacement lexicon file. The built-in lexicon is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("results"),
        }
    }
}

impl MoodConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MoodConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.url.trim().is_empty() {
            return Err(ConfigError::Invalid("feed.url must not be empty".into()));
        }
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::Invalid("feed.timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    pub fn http_options(&self) -> HttpFeedOptions {
        HttpFeedOptions {
            timeout: Duration::from_secs(self.feed.timeout_secs),
            max_retries: self.feed.max_retries,
            base_delay: Duration::from_millis(self.feed.retry_base_ms),
        }
    }

    /// The lexicon this configuration selects, loaded once per call site.
    pub fn resolve_lexicon(&self) -> Result<Cow<'static, Lexicon>, ConfigError> {
        match &self.lexicon.path {
            Some(path) => Ok(Cow::Owned(Lexicon::from_file(path)?)),
            None => Ok(Cow::Borrowed(Lexicon::builtin())),
        }
    }
}

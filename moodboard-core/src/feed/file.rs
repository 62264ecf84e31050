//! Feed backed by a JSON dump on disk.

use std::path::PathBuf;

use super::provider::{parse_feed_body, FeedError, FeedProvider, FeedSource};
use crate::domain::RawHeadline;

/// Reads `{ "news": [...] }` (or a bare array) from a file on every fetch.
pub struct FileFeed {
    path: PathBuf,
    name: String,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

impl FeedProvider for FileFeed {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<Vec<RawHeadline>, FeedError> {
        let body = std::fs::read_to_string(&self.path)?;
        parse_feed_body(&body)
    }

    fn source(&self) -> FeedSource {
        FeedSource::File
    }
}

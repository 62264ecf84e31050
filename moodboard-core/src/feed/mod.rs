//! Headline feeds and the static fallback dataset.

pub mod fallback;
pub mod file;
pub mod http;
pub mod provider;

pub use fallback::fallback_headlines;
pub use file::FileFeed;
pub use http::{HttpFeed, HttpFeedOptions};
pub use provider::{parse_feed_body, FeedError, FeedProvider, FeedSource};

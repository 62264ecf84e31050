//! Headline loading with explicit fallback.
//!
//! Implements the fallback policy:
//! 1. If online and a provider is configured → fetch from it
//! 2. If the fetch fails, or we are offline → substitute the bundled dataset
//! 3. If fallback is disabled → fail with the provider error
//!
//! The engine only ever sees the records this returns, so it never has to
//! handle a failed fetch.

use moodboard_core::feed::{fallback_headlines, FeedError, FeedProvider, FeedSource};
use moodboard_core::RawHeadline;
use thiserror::Error;

/// Errors from the loading layer. Only possible with fallback disabled.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("feed '{provider}' failed and fallback is disabled: {error}")]
    FetchFailed {
        provider: String,
        #[source]
        error: FeedError,
    },

    #[error("no feed available (offline or unconfigured) and fallback is disabled")]
    NoSource,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// If true, never call the provider.
    pub offline: bool,
    /// If true, substitute the bundled dataset when no live batch is available.
    pub fallback: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            offline: false,
            fallback: true,
        }
    }
}

/// A batch of raw records with provenance.
#[derive(Debug, Clone)]
pub struct LoadedBatch {
    pub records: Vec<RawHeadline>,
    pub source: FeedSource,
    /// Why the provider's batch was not used, when it was not.
    pub provider_error: Option<String>,
    /// BLAKE3 over the records, for telling batches apart.
    pub batch_hash: String,
}

impl LoadedBatch {
    fn new(records: Vec<RawHeadline>, source: FeedSource, provider_error: Option<String>) -> Self {
        let batch_hash = batch_hash(&records);
        Self {
            records,
            source,
            provider_error,
            batch_hash,
        }
    }
}

/// `fetch().or_else(fallback)`, spelled out.
pub fn load_headlines(
    provider: Option<&dyn FeedProvider>,
    opts: &LoadOptions,
) -> Result<LoadedBatch, LoadError> {
    let mut failure = None;

    if !opts.offline {
        if let Some(prov) = provider {
            match prov.fetch() {
                Ok(records) => return Ok(LoadedBatch::new(records, prov.source(), None)),
                Err(error) => {
                    tracing::warn!(provider = prov.name(), %error, "feed fetch failed");
                    failure = Some((prov.name().to_string(), error));
                }
            }
        }
    }

    if opts.fallback {
        tracing::info!("using bundled fallback headlines");
        let reason = failure.map(|(_, e)| e.to_string());
        return Ok(LoadedBatch::new(fallback_headlines(), FeedSource::Fallback, reason));
    }

    match failure {
        Some((provider, error)) => Err(LoadError::FetchFailed { provider, error }),
        None => Err(LoadError::NoSource),
    }
}

/// Deterministic hash over every field of every record, in order.
pub fn batch_hash(records: &[RawHeadline]) -> String {
    let mut hasher = blake3::Hasher::new();
    for record in records {
        for field in [
            &record.source,
            &record.source_name,
            &record.title,
            &record.link,
            &record.timestamp,
        ] {
            match field {
                Some(value) => {
                    hasher.update(&[1]);
                    hasher.update(&(value.len() as u64).to_le_bytes());
                    hasher.update(value.as_bytes());
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }
    }
    hasher.finalize().to_hex().to_string()
}

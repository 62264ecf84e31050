//! MoodBoard runner: refresh orchestration on top of `moodboard-core`.
//!
//! This crate provides:
//! - TOML configuration (feed endpoint, retries, lexicon override, output dir)
//! - Headline loading with live/offline/fallback policy and batch hashing
//! - Board state that survives empty batches
//! - Parallel scoring of independent batches
//! - JSON and CSV artifact export

pub mod board;
pub mod config;
pub mod export;
pub mod loader;
pub mod refresh;

pub use board::{BoardSnapshot, MoodBoard};
pub use config::{ConfigError, MoodConfig, DEFAULT_FEED_URL};
pub use export::{
    export_headlines_csv, export_json, import_json, load_artifacts, save_artifacts, ArtifactPaths,
    SCHEMA_VERSION,
};
pub use loader::{batch_hash, load_headlines, LoadError, LoadOptions, LoadedBatch};
pub use refresh::{refresh, score_batches, RefreshOutcome};

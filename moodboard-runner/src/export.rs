//! Board export: JSON and CSV artifacts.
//!
//! - **JSON**: the full snapshot with a `schema_version` field
//! - **CSV**: one row per classified headline for spreadsheet tools
//!
//! Unknown (newer) schema versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use moodboard_core::ClassifiedHeadline;
use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardArtifactRef<'a> {
    schema_version: u32,
    #[serde(flatten)]
    snapshot: &'a BoardSnapshot,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardArtifact {
    schema_version: u32,
    #[serde(flatten)]
    snapshot: BoardSnapshot,
}

/// Where `save_artifacts` wrote each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub dir: PathBuf,
    pub board_json: PathBuf,
    pub headlines_csv: PathBuf,
}

pub fn export_json(snapshot: &BoardSnapshot) -> Result<String> {
    let artifact = BoardArtifactRef {
        schema_version: SCHEMA_VERSION,
        snapshot,
    };
    serde_json::to_string_pretty(&artifact).context("failed to serialize board snapshot to JSON")
}

pub fn import_json(json: &str) -> Result<BoardSnapshot> {
    let artifact: BoardArtifact =
        serde_json::from_str(json).context("failed to deserialize board snapshot from JSON")?;
    if artifact.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            artifact.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(artifact.snapshot)
}

/// Columns: id, source, display_name, timestamp, title, link, score,
/// polarity, matched_tokens (joined with `|`)
pub fn export_headlines_csv(headlines: &[ClassifiedHeadline]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "source",
        "display_name",
        "timestamp",
        "title",
        "link",
        "score",
        "polarity",
        "matched_tokens",
    ])?;

    for h in headlines {
        wtr.write_record([
            &h.id.to_string(),
            &h.source,
            &h.display_name,
            &h.timestamp,
            &h.title,
            &h.link,
            &h.score.to_string(),
            &h.polarity.to_string(),
            &h.matched_tokens.join("|"),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Write `board.json` and `headlines.csv` into a fresh
/// `mood_<timestamp>_<hash prefix>` directory under `output_dir`.
pub fn save_artifacts(snapshot: &BoardSnapshot, output_dir: &Path) -> Result<ArtifactPaths> {
    let hash_prefix: String = snapshot.batch_hash.chars().take(8).collect();
    let dirname = format!(
        "mood_{}_{}",
        snapshot.updated_at.format("%Y%m%d_%H%M%S"),
        hash_prefix
    );
    let dir = output_dir.join(dirname);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create artifact dir: {}", dir.display()))?;

    let board_json = dir.join("board.json");
    std::fs::write(&board_json, export_json(snapshot)?)
        .with_context(|| format!("failed to write {}", board_json.display()))?;

    let headlines_csv = dir.join("headlines.csv");
    std::fs::write(&headlines_csv, export_headlines_csv(&snapshot.headlines)?)
        .with_context(|| format!("failed to write {}", headlines_csv.display()))?;

    tracing::info!(dir = %dir.display(), "artifacts saved");
    Ok(ArtifactPaths {
        dir,
        board_json,
        headlines_csv,
    })
}

pub fn load_artifacts(dir: &Path) -> Result<BoardSnapshot> {
    let path = dir.join("board.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}

//! MoodBoard CLI: fetch, score, classify and lexicon commands.
//!
//! Commands:
//! - `fetch` refreshes once from the live feed (or the fallback) and renders the board
//! - `score` scores saved feed dumps, one board per file
//! - `classify` scores a single title
//! - `lexicon` lists the active lexicon

mod render;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use moodboard_core::feed::{FeedProvider, FeedSource, FileFeed, HttpFeed};
use moodboard_core::{classify, Lexicon, RawHeadline};
use moodboard_runner::{
    batch_hash, export_json, refresh, save_artifacts, score_batches, BoardSnapshot, LoadOptions,
    MoodBoard, MoodConfig, RefreshOutcome, SCHEMA_VERSION,
};
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    name = "moodboard",
    about = "MoodBoard CLI: lexicon-based sentiment board for financial headlines"
)]
struct Cli {
    /// Log level for stderr output (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the headline feed once and render the board.
    Fetch {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Feed URL, overriding the config.
        #[arg(long)]
        url: Option<String>,

        /// Offline mode: skip the network and show the bundled headlines.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Fail instead of substituting the bundled headlines.
        #[arg(long, default_value_t = false)]
        no_fallback: bool,

        /// Print the board as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Save board.json and headlines.csv under the output directory.
        #[arg(long, default_value_t = false)]
        save: bool,

        /// Output directory for artifacts, overriding the config.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Score saved feed dumps, one board per file.
    Score {
        /// Feed JSON files (`{"news": [...]}` or a bare array).
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Lexicon TOML file. Defaults to the built-in lexicon.
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Print boards as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Classify a single headline title.
    Classify {
        title: String,

        /// Lexicon TOML file. Defaults to the built-in lexicon.
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// List the active lexicon.
    Lexicon {
        /// Lexicon TOML file. Defaults to the built-in lexicon.
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match cli.command {
        Commands::Fetch {
            config,
            url,
            offline,
            no_fallback,
            json,
            save,
            output_dir,
        } => run_fetch(config, url, offline, no_fallback, json, save, output_dir),
        Commands::Score {
            files,
            lexicon,
            json,
        } => run_score(&files, lexicon.as_deref(), json),
        Commands::Classify { title, lexicon } => {
            let lexicon = load_lexicon(lexicon.as_deref())?;
            let classification = classify(&lexicon, &title);
            print!("{}", render::render_classification(&title, &classification));
            Ok(())
        }
        Commands::Lexicon { lexicon } => {
            let lexicon = load_lexicon(lexicon.as_deref())?;
            print!("{}", render::render_lexicon(&lexicon));
            Ok(())
        }
    }
}

fn init_tracing(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            Targets::new()
                .with_target("hyper_util", Level::WARN)
                .with_default(level),
        );
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn load_lexicon(path: Option<&Path>) -> Result<Cow<'static, Lexicon>> {
    match path {
        Some(p) => {
            let lexicon = Lexicon::from_file(p)
                .with_context(|| format!("failed to load lexicon from {}", p.display()))?;
            Ok(Cow::Owned(lexicon))
        }
        None => Ok(Cow::Borrowed(Lexicon::builtin())),
    }
}

fn run_fetch(
    config_path: Option<PathBuf>,
    url: Option<String>,
    offline: bool,
    no_fallback: bool,
    json: bool,
    save: bool,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut config = MoodConfig::load_or_default(config_path.as_deref())?;
    if let Some(url) = url {
        config.feed.url = url;
        config.validate()?;
    }
    let lexicon = config.resolve_lexicon()?;

    let feed = if offline {
        None
    } else {
        Some(HttpFeed::new(config.feed.url.clone(), &config.http_options())?)
    };
    let provider = feed.as_ref().map(|f| f as &dyn FeedProvider);
    let opts = LoadOptions {
        offline,
        fallback: !no_fallback,
    };

    let mut board = MoodBoard::new();
    let outcome = refresh(&mut board, &lexicon, provider, &opts)?;
    if let RefreshOutcome::Updated {
        provider_error: Some(reason),
        ..
    } = &outcome
    {
        eprintln!("Feed unavailable ({reason}); showing bundled headlines.");
    }

    if json {
        match board.snapshot() {
            Some(snapshot) => println!("{}", export_json(snapshot)?),
            None => println!("null"),
        }
    } else {
        print!("{}", render::render_board(board.snapshot()));
    }

    if save {
        match board.snapshot() {
            Some(snapshot) => {
                let dir = output_dir.unwrap_or_else(|| config.output.dir.clone());
                let paths = save_artifacts(snapshot, &dir)?;
                println!("Artifacts saved to: {}", paths.dir.display());
            }
            None => eprintln!("Nothing to save: the feed returned no headlines."),
        }
    }

    Ok(())
}

fn run_score(files: &[PathBuf], lexicon_path: Option<&Path>, json: bool) -> Result<()> {
    let lexicon = load_lexicon(lexicon_path)?;

    let batches: Vec<Vec<RawHeadline>> = files
        .iter()
        .map(|path| {
            FileFeed::new(path)
                .fetch()
                .with_context(|| format!("failed to read feed dump {}", path.display()))
        })
        .collect::<Result<_>>()?;

    let now = Utc::now();
    let boards: Vec<Option<BoardSnapshot>> = score_batches(&lexicon, &batches)
        .into_iter()
        .zip(&batches)
        .map(|(outcome, records)| {
            outcome.map(|o| BoardSnapshot::new(o, FeedSource::File, batch_hash(records), now))
        })
        .collect();

    if json {
        let entries: Vec<serde_json::Value> = files
            .iter()
            .zip(&boards)
            .map(|(path, board)| {
                serde_json::json!({
                    "file": path.display().to_string(),
                    "board": board,
                })
            })
            .collect();
        let doc = serde_json::json!({
            "schemaVersion": SCHEMA_VERSION,
            "boards": entries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&doc).context("failed to serialize boards to JSON")?
        );
        return Ok(());
    }

    for (i, (path, board)) in files.iter().zip(&boards).enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", path.display());
        print!("{}", render::render_board(board.as_ref()));
    }
    Ok(())
}

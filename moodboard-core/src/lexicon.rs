//! Weighted keyword lexicon.
//!
//! Two ordered partitions of `(token, weight)` pairs. Tokens are raw
//! substrings, matched case-sensitively against headline text with no
//! normalization. Weight magnitude encodes evidence strength (1 mild,
//! 2 moderate, 3 strong); the sign must agree with the partition.
//!
//! The built-in lexicon covers Traditional-Chinese financial headlines. A
//! replacement can be loaded once from TOML; loading checks the authoring
//! contract, the classifier never does.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bullish terms. Order matters: matched tokens are reported in this order.
const BULLISH_KEYWORDS: &[(&str, i32)] = &[
    ("創新高", 3),
    ("優於預期", 2),
    ("大漲", 2),
    ("漲停", 3),
    ("買進", 2),
    ("擴產", 1),
    ("殖利率", 1),
    ("旺季", 1),
    ("外資喊進", 3),
    ("反彈", 1),
    ("強勁", 2),
    ("供不應求", 2),
    ("上修", 2),
    ("調高", 2),
    ("加薪", 1),
    ("獲利", 1),
    ("打入", 2),
    ("供應鏈", 1),
    ("做多", 2),
    ("按讚", 1),
    ("噴出", 2),
    ("樂觀", 1),
    ("動能", 2),
    ("成長", 1),
    ("看好", 2),
    ("創紀錄", 3),
    ("回升", 1),
];

/// Bearish terms.
const BEARISH_KEYWORDS: &[(&str, i32)] = &[
    ("創新低", -3),
    ("不如預期", -2),
    ("重挫", -2),
    ("賣出", -2),
    ("裁員", -2),
    ("升息", -2),
    ("通膨", -1),
    ("庫存過高", -2),
    ("下修", -3),
    ("跌停", -3),
    ("虧損", -2),
    ("保守", -1),
    ("衰退", -2),
    ("缺工", -1),
    ("戰爭", -2),
    ("利空", -2),
    ("賣壓", -2),
    ("示警", -1),
    ("疑慮", -1),
    ("不確定性", -2),
    ("逆風", -2),
    ("壓力", -1),
    ("警惕", -1),
    ("低迷", -2),
];

/// A single weighted token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub token: String,
    pub weight: i32,
}

impl LexiconEntry {
    pub fn new(token: impl Into<String>, weight: i32) -> Self {
        Self {
            token: token.into(),
            weight,
        }
    }
}

/// Which side of the lexicon an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Positive,
    Negative,
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partition::Positive => write!(f, "positive"),
            Partition::Negative => write!(f, "negative"),
        }
    }
}

/// Authoring-contract violations found while building a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("empty token at {partition}[{index}]")]
    EmptyToken { partition: Partition, index: usize },

    #[error("token '{token}' in {partition} partition has weight {weight} with the wrong sign")]
    WrongSign {
        partition: Partition,
        token: String,
        weight: i32,
    },

    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lexicon TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML shape of a lexicon file.
///
/// ```toml
/// positive = [{ token = "大漲", weight = 2 }]
/// negative = [{ token = "重挫", weight = -2 }]
/// ```
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    positive: Vec<LexiconEntry>,
    #[serde(default)]
    negative: Vec<LexiconEntry>,
}

/// Immutable weighted-keyword dictionary.
///
/// No mutation is exposed once built; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<LexiconEntry>,
    negative: Vec<LexiconEntry>,
}

impl Lexicon {
    /// The built-in financial lexicon, initialized on first use.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| Lexicon {
            positive: to_entries(BULLISH_KEYWORDS),
            negative: to_entries(BEARISH_KEYWORDS),
        })
    }

    /// Build a lexicon from explicit partitions, checking the authoring contract.
    pub fn from_partitions(
        positive: Vec<LexiconEntry>,
        negative: Vec<LexiconEntry>,
    ) -> Result<Self, LexiconError> {
        let lexicon = Self { positive, negative };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Parse a lexicon from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(content)?;
        Self::from_partitions(file.positive, file.negative)
    }

    /// Load a lexicon from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check non-empty tokens and partition-consistent weight signs.
    pub fn validate(&self) -> Result<(), LexiconError> {
        check_partition(Partition::Positive, &self.positive)?;
        check_partition(Partition::Negative, &self.negative)
    }

    /// Bullish entries in scan order.
    pub fn positive(&self) -> &[LexiconEntry] {
        &self.positive
    }

    /// Bearish entries in scan order.
    pub fn negative(&self) -> &[LexiconEntry] {
        &self.negative
    }

    /// All entries: positive partition first, then negative.
    pub fn entries(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.positive.iter().chain(self.negative.iter())
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn to_entries(table: &[(&str, i32)]) -> Vec<LexiconEntry> {
    table
        .iter()
        .map(|&(token, weight)| LexiconEntry::new(token, weight))
        .collect()
}

fn check_partition(partition: Partition, entries: &[LexiconEntry]) -> Result<(), LexiconError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.token.is_empty() {
            return Err(LexiconError::EmptyToken { partition, index });
        }
        let sign_ok = match partition {
            Partition::Positive => entry.weight > 0,
            Partition::Negative => entry.weight < 0,
        };
        if !sign_ok {
            return Err(LexiconError::WrongSign {
                partition,
                token: entry.token.clone(),
                weight: entry.weight,
            });
        }
    }
    Ok(())
}

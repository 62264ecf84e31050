//! Gauge bands: five display zones over the market index.
//!
//! Boundaries are inclusive and checked in priority order:
//! `>= 65`, `>= 55`, `<= 35`, `<= 45`, otherwise neutral.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    StronglyBullish,
    MildlyBullish,
    Neutral,
    MildlyBearish,
    StronglyBearish,
}

impl GaugeBand {
    pub fn from_index(index: u8) -> Self {
        if index >= 65 {
            GaugeBand::StronglyBullish
        } else if index >= 55 {
            GaugeBand::MildlyBullish
        } else if index <= 35 {
            GaugeBand::StronglyBearish
        } else if index <= 45 {
            GaugeBand::MildlyBearish
        } else {
            GaugeBand::Neutral
        }
    }

    /// Status text under the gauge.
    pub fn label(self) -> &'static str {
        match self {
            GaugeBand::StronglyBullish => "市場樂觀",
            GaugeBand::MildlyBullish => "偏向多方",
            GaugeBand::Neutral => "中立觀望",
            GaugeBand::MildlyBearish => "偏向空方",
            GaugeBand::StronglyBearish => "市場悲觀",
        }
    }

    /// Needle rotation in degrees; positive leans bullish.
    pub fn needle_degrees(self) -> i16 {
        match self {
            GaugeBand::StronglyBullish => 45,
            GaugeBand::MildlyBullish => 20,
            GaugeBand::Neutral => 0,
            GaugeBand::MildlyBearish => -20,
            GaugeBand::StronglyBearish => -45,
        }
    }
}

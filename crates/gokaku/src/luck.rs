use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GokakuError;
use crate::rank::Rank;

/// Which total-grid ranks survive candidate generation.
///
/// Parsing is strict: anything other than `all`, `good` or `excellent` is an
/// [`GokakuError::InvalidLuckFilter`]. The generator only ever sees a parsed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckFilter {
    #[default]
    All,
    /// daikichi or kichi
    Good,
    /// daikichi only
    Excellent,
}

impl LuckFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    #[must_use]
    pub const fn admits(self, rank: Rank) -> bool {
        match self {
            Self::All => true,
            Self::Good => matches!(rank, Rank::Daikichi | Rank::Kichi),
            Self::Excellent => matches!(rank, Rank::Daikichi),
        }
    }
}

impl fmt::Display for LuckFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LuckFilter {
    type Err = GokakuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            other => Err(GokakuError::InvalidLuckFilter(other.to_string())),
        }
    }
}

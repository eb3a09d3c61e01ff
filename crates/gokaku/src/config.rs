use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GokakuError, Result};
use crate::luck::LuckFilter;
use crate::rank::{RankTable, RankTiers};

/// Default cap on candidates per result group.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Engine settings, usually read from `seimei.toml`.
///
/// ```toml
/// max_results_per_group = 20
/// default_luck = "good"
///
/// [rank_tiers]
/// daikichi = [3, 5, 6]
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Candidates kept per group after sorting
    pub max_results_per_group: usize,

    /// Luck filter used when a query does not name one
    pub default_luck: LuckFilter,

    /// Replacement for the built-in rank partition
    pub rank_tiers: Option<RankTiers>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results_per_group: DEFAULT_MAX_RESULTS,
            default_luck: LuckFilter::All,
            rank_tiers: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results_per_group == 0 {
            return Err(GokakuError::invalid_config(
                "max_results_per_group must be > 0",
            ));
        }
        if let Some(tiers) = &self.rank_tiers {
            RankTable::from_tiers(tiers)?;
        }
        Ok(())
    }

    /// Rank table in effect: the configured tiers, or the standard table.
    pub fn rank_table(&self) -> Result<RankTable> {
        match &self.rank_tiers {
            Some(tiers) => RankTable::from_tiers(tiers),
            None => Ok(RankTable::standard()),
        }
    }
}

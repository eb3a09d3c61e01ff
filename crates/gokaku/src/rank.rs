use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GokakuError, Result};
use crate::grid::FiveGrid;

/// Highest stroke count the rank table covers; 1 is the lowest.
pub const MAX_RANKED_STROKES: i64 = 50;

/// Fortune tier of a stroke count, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Daikichi,
    Kichi,
    Chukichi,
    Suekichi,
    Kyo,
    /// Outside the 1–50 table
    Unknown,
}

impl Rank {
    /// The five real tiers, best to worst.
    pub const TIERS: [Self; 5] = [
        Self::Daikichi,
        Self::Kichi,
        Self::Chukichi,
        Self::Suekichi,
        Self::Kyo,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Daikichi => "daikichi",
            Self::Kichi => "kichi",
            Self::Chukichi => "chukichi",
            Self::Suekichi => "suekichi",
            Self::Kyo => "kyo",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daikichi => "大吉",
            Self::Kichi => "吉",
            Self::Chukichi => "中吉",
            Self::Suekichi => "末吉",
            Self::Kyo => "凶",
            Self::Unknown => "判定外",
        }
    }

    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Daikichi => 4,
            Self::Kichi => 3,
            Self::Chukichi => 2,
            Self::Suekichi => 1,
            Self::Kyo | Self::Unknown => 0,
        }
    }

    #[must_use]
    pub const fn entry(self) -> RankEntry {
        RankEntry {
            rank: self,
            label: self.label(),
            score: self.score(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Classification result for one stroke count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    #[serde(rename = "rank_id")]
    pub rank: Rank,
    pub label: &'static str,
    pub score: u8,
}

impl RankEntry {
    pub const UNKNOWN: Self = Rank::Unknown.entry();

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.rank == Rank::Unknown
    }
}

/// Rank of each of the five grid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridRanks {
    pub heaven: RankEntry,
    pub person: RankEntry,
    pub earth: RankEntry,
    pub outer: RankEntry,
    pub total: RankEntry,
}

const DAIKICHI: &[i64] = &[3, 5, 6, 7, 8, 11, 13, 15, 16, 24, 31, 33, 35, 37, 41, 45, 47];
const KICHI: &[i64] = &[1, 9, 10, 17, 21, 23, 25, 29, 39, 43, 49];
const CHUKICHI: &[i64] = &[18, 26, 32, 36, 40, 44];
const SUEKICHI: &[i64] = &[4, 14, 22, 28, 30, 34, 38, 42, 46, 48];
const KYO: &[i64] = &[2, 12, 19, 20, 27, 50];

/// Stroke counts assigned to each tier. Deserializable so a config file can
/// replace the standard partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTiers {
    pub daikichi: Vec<i64>,
    pub kichi: Vec<i64>,
    pub chukichi: Vec<i64>,
    pub suekichi: Vec<i64>,
    pub kyo: Vec<i64>,
}

impl Default for RankTiers {
    fn default() -> Self {
        Self {
            daikichi: DAIKICHI.to_vec(),
            kichi: KICHI.to_vec(),
            chukichi: CHUKICHI.to_vec(),
            suekichi: SUEKICHI.to_vec(),
            kyo: KYO.to_vec(),
        }
    }
}

impl RankTiers {
    #[must_use]
    pub fn counts(&self, rank: Rank) -> &[i64] {
        match rank {
            Rank::Daikichi => &self.daikichi,
            Rank::Kichi => &self.kichi,
            Rank::Chukichi => &self.chukichi,
            Rank::Suekichi => &self.suekichi,
            Rank::Kyo => &self.kyo,
            Rank::Unknown => &[],
        }
    }
}

/// Total lookup from stroke count (1–50) to rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    ranks: [Rank; MAX_RANKED_STROKES as usize],
}

impl Default for RankTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RankTable {
    /// The built-in partition.
    #[must_use]
    pub fn standard() -> Self {
        let mut ranks = [Rank::Unknown; MAX_RANKED_STROKES as usize];
        for (counts, rank) in [
            (DAIKICHI, Rank::Daikichi),
            (KICHI, Rank::Kichi),
            (CHUKICHI, Rank::Chukichi),
            (SUEKICHI, Rank::Suekichi),
            (KYO, Rank::Kyo),
        ] {
            for &count in counts {
                if let Some(slot) = slot_index(count) {
                    ranks[slot] = rank;
                }
            }
        }
        Self { ranks }
    }

    /// Build from custom tiers. Every count 1–50 must appear in exactly one
    /// tier; gaps, overlaps and out-of-range counts are rejected.
    pub fn from_tiers(tiers: &RankTiers) -> Result<Self> {
        let mut ranks = [Rank::Unknown; MAX_RANKED_STROKES as usize];
        for rank in Rank::TIERS {
            for &count in tiers.counts(rank) {
                let slot = slot_index(count).ok_or_else(|| {
                    GokakuError::invalid_rank_table(format!(
                        "stroke count {count} in {rank} is outside 1-{MAX_RANKED_STROKES}"
                    ))
                })?;
                let current = ranks[slot];
                if current != Rank::Unknown {
                    return Err(GokakuError::invalid_rank_table(format!(
                        "stroke count {count} assigned to both {current} and {rank}"
                    )));
                }
                ranks[slot] = rank;
            }
        }
        let table = Self { ranks };
        table.validate()?;
        Ok(table)
    }

    /// Check that no stroke count in 1–50 is left unassigned.
    pub fn validate(&self) -> Result<()> {
        let gaps: Vec<String> = (1..=MAX_RANKED_STROKES)
            .filter(|&count| self.classify(count).is_unknown())
            .map(|count| count.to_string())
            .collect();
        if gaps.is_empty() {
            Ok(())
        } else {
            Err(GokakuError::invalid_rank_table(format!(
                "unassigned stroke counts: {}",
                gaps.join(", ")
            )))
        }
    }

    /// Rank for a stroke count; anything outside 1–50 is [`Rank::Unknown`].
    #[must_use]
    pub fn classify(&self, strokes: i64) -> RankEntry {
        slot_index(strokes).map_or(RankEntry::UNKNOWN, |slot| self.ranks[slot].entry())
    }

    #[must_use]
    pub fn classify_grid(&self, grid: &FiveGrid) -> GridRanks {
        GridRanks {
            heaven: self.classify(grid.heaven),
            person: self.classify(grid.person),
            earth: self.classify(grid.earth),
            outer: self.classify(grid.outer),
            total: self.classify(grid.total),
        }
    }

    /// Tiers back out of the table, counts ascending.
    #[must_use]
    pub fn tiers(&self) -> RankTiers {
        let collect = |rank: Rank| -> Vec<i64> {
            (1..=MAX_RANKED_STROKES)
                .filter(|&count| self.classify(count).rank == rank)
                .collect()
        };
        RankTiers {
            daikichi: collect(Rank::Daikichi),
            kichi: collect(Rank::Kichi),
            chukichi: collect(Rank::Chukichi),
            suekichi: collect(Rank::Suekichi),
            kyo: collect(Rank::Kyo),
        }
    }
}

fn slot_index(strokes: i64) -> Option<usize> {
    if (1..=MAX_RANKED_STROKES).contains(&strokes) {
        usize::try_from(strokes - 1).ok()
    } else {
        None
    }
}

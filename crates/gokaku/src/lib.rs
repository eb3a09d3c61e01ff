//! # Seimei Gokaku
//!
//! Five-grid (gokaku) name scoring: derives the heaven, person, earth, outer
//! and total stroke counts of a full name, ranks each count, and generates
//! ranked given-name candidates for a family name.
//!
//! ## Architecture
//!
//! ```text
//! family name ─┐
//!              ├─> FiveGridCalculator ──> RankTable::classify_grid
//! name pool ───┘          │                        │
//!                         └──── CandidateGenerator ┘
//!                                 ├─> filter terms (dedup, substring)
//!                                 ├─> luck filter on total rank
//!                                 ├─> stable sort (score desc, total asc)
//!                                 └─> truncate per group
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seimei_gokaku::{CandidateGenerator, GenerateRequest, LuckFilter, NamePool, RankTable};
//! use seimei_strokes::{NoopDiagnostics, StrokeTable};
//!
//! let strokes = StrokeTable::from_entries([("田", 5), ("中", 4), ("太", 4), ("郎", 9)]).unwrap();
//! let pool = NamePool::new(["太郎"]);
//! let ranks = RankTable::standard();
//!
//! let groups = CandidateGenerator::new(&strokes, &pool, &ranks).generate(
//!     &GenerateRequest {
//!         family_name: "田中".into(),
//!         family_stroke: 9,
//!         filter_terms: vec![],
//!         luck: LuckFilter::All,
//!     },
//!     &mut NoopDiagnostics,
//! );
//!
//! assert_eq!(groups[0].candidates[0].grid.total, 22);
//! ```

mod config;
mod engine;
mod error;
mod generator;
mod grid;
mod luck;
mod pool;
mod rank;

pub use config::{EngineConfig, DEFAULT_MAX_RESULTS};
pub use engine::{SearchOutcome, SearchQuery, SeimeiEngine, STROKE_MASTER_MISSING};
pub use error::{GokakuError, Result};
pub use generator::{
    dedup_filter_terms, split_filter_terms, total_candidates, Candidate, CandidateGenerator,
    GenerateRequest, ResultGroup,
};
pub use grid::{boundary_pair, FiveGrid, FiveGridCalculator};
pub use luck::LuckFilter;
pub use pool::{is_valid_given_name, NamePool, MAX_GIVEN_NAME_CHARS};
pub use rank::{GridRanks, Rank, RankEntry, RankTable, RankTiers, MAX_RANKED_STROKES};

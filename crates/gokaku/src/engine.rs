use seimei_strokes::{DiagnosticEvent, Diagnostics, StrokeError, StrokeResolver, StrokeTable};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{GokakuError, Result};
use crate::generator::{
    total_candidates, Candidate, CandidateGenerator, GenerateRequest, ResultGroup,
};
use crate::grid::FiveGridCalculator;
use crate::luck::LuckFilter;
use crate::pool::NamePool;
use crate::rank::RankTable;

/// Event tag reported when the family name cannot be resolved.
pub const STROKE_MASTER_MISSING: &str = "stroke_master_missing";

/// A user query before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub family_name: String,
    pub filter_terms: Vec<String>,
    /// `None` uses the configured default
    pub luck: Option<LuckFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub family_name: String,
    pub family_stroke: u32,
    pub luck: LuckFilter,
    pub groups: Vec<ResultGroup>,
}

impl SearchOutcome {
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        total_candidates(&self.groups)
    }
}

/// Owns the lookup tables for the lifetime of the process and answers queries.
#[derive(Debug, Clone)]
pub struct SeimeiEngine {
    strokes: StrokeTable,
    pool: NamePool,
    ranks: RankTable,
    config: EngineConfig,
}

impl SeimeiEngine {
    pub fn new(strokes: StrokeTable, pool: NamePool, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let ranks = config.rank_table()?;
        log::debug!(
            "Engine ready: {} stroke entries, {} given names",
            strokes.len(),
            pool.len()
        );
        Ok(Self {
            strokes,
            pool,
            ranks,
            config,
        })
    }

    #[must_use]
    pub fn strokes(&self) -> &StrokeTable {
        &self.strokes
    }

    #[must_use]
    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve the family name, refusing to search when it is empty or has a
    /// character without stroke data.
    pub fn family_stroke(
        &self,
        family_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<u32> {
        let family_name = family_name.trim();
        if family_name.is_empty() {
            return Err(GokakuError::EmptyFamilyName);
        }
        match StrokeResolver::new(&self.strokes).try_resolve(family_name) {
            Ok(strokes) => Ok(strokes),
            Err(StrokeError::MissingStrokeData { text, character }) => {
                diagnostics.report(DiagnosticEvent::missing_stroke_data(&text, &character));
                diagnostics.report(DiagnosticEvent::app_error(STROKE_MASTER_MISSING, &text));
                Err(GokakuError::UnresolvableFamilyName {
                    family_name: text,
                    character,
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    pub fn search(
        &self,
        query: &SearchQuery,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<SearchOutcome> {
        let family_name = query.family_name.trim().to_string();
        let family_stroke = self.family_stroke(&family_name, diagnostics)?;
        let luck = query.luck.unwrap_or(self.config.default_luck);

        let request = GenerateRequest {
            family_name: family_name.clone(),
            family_stroke,
            filter_terms: query.filter_terms.clone(),
            luck,
        };
        let groups = CandidateGenerator::new(&self.strokes, &self.pool, &self.ranks)
            .with_max_results(self.config.max_results_per_group)
            .generate(&request, diagnostics);

        let outcome = SearchOutcome {
            family_name,
            family_stroke,
            luck,
            groups,
        };
        log::info!(
            "Search '{}' (luck={}): {} candidates in {} group(s)",
            outcome.family_name,
            outcome.luck,
            outcome.total_candidates(),
            outcome.groups.len()
        );
        Ok(outcome)
    }

    /// Five-grid breakdown of a single full name. Unlike [`search`](Self::search)
    /// this does not skip an unresolvable given name.
    pub fn evaluate(
        &self,
        family_name: &str,
        given_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Candidate> {
        let family_name = family_name.trim();
        let given_name = given_name.trim();
        let family_stroke = self.family_stroke(family_name, diagnostics)?;
        let grid = FiveGridCalculator::new(&self.strokes).compute_with_family_stroke(
            family_name,
            family_stroke,
            given_name,
            diagnostics,
        );
        Ok(Candidate {
            family_name: family_name.to_string(),
            given_name: given_name.to_string(),
            grid,
            ranks: self.ranks.classify_grid(&grid),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seimei_strokes::CollectedDiagnostics;

    fn engine() -> SeimeiEngine {
        let strokes = StrokeTable::from_entries([("田", 5), ("中", 4), ("太", 4), ("郎", 9)]).unwrap();
        SeimeiEngine::new(strokes, NamePool::new(["太郎"]), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_family_name_rejected() {
        let mut sink = CollectedDiagnostics::new();
        let err = engine()
            .search(&SearchQuery::default(), &mut sink)
            .unwrap_err();
        assert!(matches!(err, GokakuError::EmptyFamilyName));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unresolvable_family_reports_and_blocks() {
        let mut sink = CollectedDiagnostics::new();
        let query = SearchQuery {
            family_name: "田村".to_string(),
            ..SearchQuery::default()
        };

        let err = engine().search(&query, &mut sink).unwrap_err();

        assert!(matches!(
            err,
            GokakuError::UnresolvableFamilyName { ref character, .. } if character == "村"
        ));
        assert_eq!(
            sink.events(),
            &[
                DiagnosticEvent::missing_stroke_data("田村", "村"),
                DiagnosticEvent::app_error(STROKE_MASTER_MISSING, "田村"),
            ]
        );
    }

    #[test]
    fn test_default_luck_from_config() {
        let strokes = StrokeTable::from_entries([("田", 5), ("中", 4), ("太", 4), ("郎", 9)]).unwrap();
        let config = EngineConfig {
            default_luck: LuckFilter::Excellent,
            ..EngineConfig::default()
        };
        let engine = SeimeiEngine::new(strokes, NamePool::new(["太郎"]), config).unwrap();
        let query = SearchQuery {
            family_name: "田中".to_string(),
            ..SearchQuery::default()
        };

        let outcome = engine.search(&query, &mut CollectedDiagnostics::new()).unwrap();

        // 田中太郎 totals 22 (suekichi)
        assert_eq!(outcome.luck, LuckFilter::Excellent);
        assert_eq!(outcome.total_candidates(), 0);
    }

    #[test]
    fn test_evaluate_keeps_unresolvable_given_name() {
        let mut sink = CollectedDiagnostics::new();
        let candidate = engine().evaluate("田中", "花子", &mut sink).unwrap();
        assert_eq!(candidate.grid.given_stroke, 0);
        assert!(!sink.is_empty());
    }
}

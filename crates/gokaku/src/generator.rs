use std::collections::HashSet;

use seimei_strokes::{text, Diagnostics, StrokeTable};
use serde::Serialize;

use crate::config::DEFAULT_MAX_RESULTS;
use crate::grid::{FiveGrid, FiveGridCalculator};
use crate::luck::LuckFilter;
use crate::pool::NamePool;
use crate::rank::{GridRanks, RankTable};

/// One evaluated full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub family_name: String,
    pub given_name: String,
    #[serde(flatten)]
    pub grid: FiveGrid,
    pub ranks: GridRanks,
}

/// Candidates for one filter term, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    /// The required substring, or `None` for the unfiltered pass
    pub filter_kanji: Option<String>,
    pub candidates: Vec<Candidate>,
}

impl ResultGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Input of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub family_name: String,
    pub family_stroke: u32,
    pub filter_terms: Vec<String>,
    pub luck: LuckFilter,
}

/// Split free-form input on whitespace into filter terms.
#[must_use]
pub fn split_filter_terms(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// NFC, drop empties, keep first occurrence of each term.
#[must_use]
pub fn dedup_filter_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    terms
        .iter()
        .map(|term| text::normalize(term.as_ref().trim()))
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Total number of candidates across groups.
#[must_use]
pub fn total_candidates(groups: &[ResultGroup]) -> usize {
    groups.iter().map(ResultGroup::len).sum()
}

/// Scores every pool entry against a family name and returns ranked groups.
///
/// Pure apart from reporting unresolvable names to the diagnostics sink.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'a> {
    calculator: FiveGridCalculator<'a>,
    pool: &'a NamePool,
    ranks: &'a RankTable,
    max_results: usize,
}

impl<'a> CandidateGenerator<'a> {
    #[must_use]
    pub const fn new(table: &'a StrokeTable, pool: &'a NamePool, ranks: &'a RankTable) -> Self {
        Self {
            calculator: FiveGridCalculator::new(table),
            pool,
            ranks,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn generate(
        &self,
        request: &GenerateRequest,
        diagnostics: &mut dyn Diagnostics,
    ) -> Vec<ResultGroup> {
        let terms = dedup_filter_terms(&request.filter_terms);
        let passes: Vec<Option<String>> = if terms.is_empty() {
            vec![None]
        } else {
            terms.into_iter().map(Some).collect()
        };

        passes
            .into_iter()
            .map(|term| {
                let candidates = self.rank_candidates(request, term.as_deref(), diagnostics);
                log::debug!(
                    "Filter {:?}: {} candidates (luck={})",
                    term,
                    candidates.len(),
                    request.luck
                );
                ResultGroup {
                    filter_kanji: term,
                    candidates,
                }
            })
            .collect()
    }

    fn rank_candidates(
        &self,
        request: &GenerateRequest,
        term: Option<&str>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Vec<Candidate> {
        let mut results: Vec<Candidate> = self
            .pool
            .iter()
            .filter(|given| term.map_or(true, |term| given.contains(term)))
            .filter_map(|given| self.evaluate(request, given, diagnostics))
            .collect();

        // sort_by is stable, so equal keys keep pool order
        results.sort_by(|a, b| {
            b.ranks
                .total
                .score
                .cmp(&a.ranks.total.score)
                .then_with(|| a.grid.total.cmp(&b.grid.total))
        });
        results.truncate(self.max_results);
        results
    }

    fn evaluate(
        &self,
        request: &GenerateRequest,
        given_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Option<Candidate> {
        let grid = self.calculator.compute_with_family_stroke(
            &request.family_name,
            request.family_stroke,
            given_name,
            diagnostics,
        );
        if !grid.has_given_strokes() {
            return None;
        }
        let ranks = self.ranks.classify_grid(&grid);
        if !request.luck.admits(ranks.total.rank) {
            return None;
        }
        Some(Candidate {
            family_name: request.family_name.clone(),
            given_name: given_name.to_string(),
            grid,
            ranks,
        })
    }
}

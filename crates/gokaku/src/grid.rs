use seimei_strokes::{text, Diagnostics, StrokeResolver, StrokeTable};
use serde::Serialize;

/// The five stroke-count grids of a full name.
///
/// Derived once and never mutated; `total == heaven + earth` and
/// `outer == total - person` hold for every value built by [`FiveGrid::from_strokes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FiveGrid {
    pub family_stroke: u32,
    pub given_stroke: u32,
    /// tenkaku: all family-name strokes
    pub heaven: i64,
    /// jinkaku: strokes of the boundary character pair
    pub person: i64,
    /// chikaku: all given-name strokes
    pub earth: i64,
    /// gaikaku
    pub outer: i64,
    /// soukaku
    pub total: i64,
}

impl FiveGrid {
    /// Derive the grid from resolved stroke counts.
    ///
    /// `boundary` is the stroke count of the boundary pair, or `None` when
    /// either name is empty, in which case person falls back to the total.
    #[must_use]
    pub fn from_strokes(family_stroke: u32, given_stroke: u32, boundary: Option<u32>) -> Self {
        let heaven = i64::from(family_stroke);
        let earth = i64::from(given_stroke);
        let total = heaven + earth;
        let person = boundary.map_or(total, i64::from);
        Self {
            family_stroke,
            given_stroke,
            heaven,
            person,
            earth,
            outer: total - person,
            total,
        }
    }

    /// Whether the given name resolved to a usable stroke count.
    #[must_use]
    pub const fn has_given_strokes(&self) -> bool {
        self.given_stroke > 0
    }
}

/// Last grapheme of the family name followed by the first grapheme of the
/// given name. A one-grapheme name contributes that grapheme.
#[must_use]
pub fn boundary_pair(family_name: &str, given_name: &str) -> Option<String> {
    let last = text::last_grapheme(family_name)?;
    let first = text::first_grapheme(given_name)?;
    Some(last + &first)
}

#[derive(Debug, Clone, Copy)]
pub struct FiveGridCalculator<'a> {
    resolver: StrokeResolver<'a>,
}

impl<'a> FiveGridCalculator<'a> {
    #[must_use]
    pub const fn new(table: &'a StrokeTable) -> Self {
        Self {
            resolver: StrokeResolver::new(table),
        }
    }

    #[must_use]
    pub const fn resolver(&self) -> StrokeResolver<'a> {
        self.resolver
    }

    pub fn compute(
        &self,
        family_name: &str,
        given_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> FiveGrid {
        let family_stroke = self.resolver.resolve(family_name, diagnostics);
        self.compute_with_family_stroke(family_name, family_stroke, given_name, diagnostics)
    }

    /// Same as [`compute`](Self::compute) with the family strokes already known.
    pub fn compute_with_family_stroke(
        &self,
        family_name: &str,
        family_stroke: u32,
        given_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> FiveGrid {
        let given_stroke = self.resolver.resolve(given_name, diagnostics);
        let boundary = boundary_pair(family_name, given_name)
            .map(|pair| self.resolver.resolve(&pair, diagnostics));
        FiveGrid::from_strokes(family_stroke, given_stroke, boundary)
    }
}

use unicode_segmentation::UnicodeSegmentation;

use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::error::{Result, StrokeError};
use crate::table::StrokeTable;
use crate::text;

/// Sums stroke counts over the graphemes of a string.
///
/// Resolution is all-or-nothing: one grapheme without a table entry makes
/// the whole string unresolvable. The sentinel form [`resolve`] returns `0`
/// in that case, so a `0` result always means "unresolvable", never a real
/// zero-stroke name.
///
/// [`resolve`]: StrokeResolver::resolve
#[derive(Debug, Clone, Copy)]
pub struct StrokeResolver<'a> {
    table: &'a StrokeTable,
}

impl<'a> StrokeResolver<'a> {
    #[must_use]
    pub const fn new(table: &'a StrokeTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &'a StrokeTable {
        self.table
    }

    /// Total strokes of `text`, or the first grapheme that has no entry.
    ///
    /// Empty text resolves to `Ok(0)`.
    pub fn try_resolve(&self, text: &str) -> Result<u32> {
        let normalized = text::normalize(text);
        let mut total: u32 = 0;
        for grapheme in normalized.graphemes(true) {
            let Some(strokes) = self.table.get(grapheme) else {
                return Err(StrokeError::missing(text, grapheme));
            };
            total = total.saturating_add(strokes);
        }
        Ok(total)
    }

    /// Fail-closed resolution: `0` for empty or unresolvable text.
    ///
    /// A missing grapheme is reported to `diagnostics` exactly once per call.
    pub fn resolve(&self, text: &str, diagnostics: &mut dyn Diagnostics) -> u32 {
        match self.try_resolve(text) {
            Ok(total) => total,
            Err(StrokeError::MissingStrokeData { text, character }) => {
                diagnostics.report(DiagnosticEvent::MissingStrokeData { text, character });
                0
            }
            Err(other) => {
                diagnostics.report(DiagnosticEvent::app_error(
                    "stroke_resolution",
                    other.to_string(),
                ));
                0
            }
        }
    }
}

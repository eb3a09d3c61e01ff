//! Error/telemetry sink for non-fatal conditions.
//!
//! The resolver and the candidate generator never fail on expected
//! conditions; they report here and keep going.

use serde::Serialize;

/// Longest detail string forwarded with an [`DiagnosticEvent::AppError`].
pub const MAX_DETAIL_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    /// `character` inside `text` has no stroke table entry
    MissingStrokeData { text: String, character: String },
    /// Application-level failure with a type tag
    AppError { kind: String, detail: String },
}

impl DiagnosticEvent {
    pub fn missing_stroke_data(text: impl Into<String>, character: impl Into<String>) -> Self {
        Self::MissingStrokeData {
            text: text.into(),
            character: character.into(),
        }
    }

    /// Build an application error, truncating `detail` to [`MAX_DETAIL_CHARS`].
    pub fn app_error(kind: impl Into<String>, detail: impl AsRef<str>) -> Self {
        Self::AppError {
            kind: kind.into(),
            detail: detail.as_ref().chars().take(MAX_DETAIL_CHARS).collect(),
        }
    }
}

pub trait Diagnostics {
    fn report(&mut self, event: DiagnosticEvent);
}

/// Forwards every event to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::MissingStrokeData { text, character } => {
                log::warn!("No stroke data for '{character}' (in '{text}')");
            }
            DiagnosticEvent::AppError { kind, detail } => {
                log::warn!("Application error [{kind}]: {detail}");
            }
        }
    }
}

/// Keeps every reported event in order.
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    events: Vec<DiagnosticEvent>,
}

impl CollectedDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Characters reported as missing, in report order (duplicates kept).
    pub fn missing_characters(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            DiagnosticEvent::MissingStrokeData { character, .. } => Some(character.as_str()),
            DiagnosticEvent::AppError { .. } => None,
        })
    }

    #[must_use]
    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn report(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn report(&mut self, _event: DiagnosticEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_detail_is_truncated() {
        let long = "名".repeat(MAX_DETAIL_CHARS + 20);
        let DiagnosticEvent::AppError { detail, .. } = DiagnosticEvent::app_error("x", &long) else {
            panic!("expected app error");
        };
        assert_eq!(detail.chars().count(), MAX_DETAIL_CHARS);
    }

    #[test]
    fn test_collected_keeps_order() {
        let mut sink = CollectedDiagnostics::new();
        sink.report(DiagnosticEvent::missing_stroke_data("ac", "c"));
        sink.report(DiagnosticEvent::app_error("stroke_master_missing", "鬱山"));
        sink.report(DiagnosticEvent::missing_stroke_data("xy", "x"));

        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.missing_characters().collect::<Vec<_>>(), vec!["c", "x"]);
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_value(DiagnosticEvent::missing_stroke_data("ac", "c")).unwrap();
        assert_eq!(json["event"], "missing_stroke_data");
        assert_eq!(json["character"], "c");
    }
}

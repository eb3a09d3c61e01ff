use thiserror::Error;

/// Result type for stroke table operations
pub type Result<T> = std::result::Result<T, StrokeError>;

/// Errors that can occur while loading stroke tables or resolving text
#[derive(Error, Debug)]
pub enum StrokeError {
    /// A grapheme has no entry in the stroke table
    #[error("Missing stroke data for '{character}' in '{text}'")]
    MissingStrokeData { text: String, character: String },

    /// Stroke counts must be positive
    #[error("Invalid stroke count for '{character}': {strokes}")]
    InvalidStrokeCount { character: String, strokes: i64 },

    /// Table keys must be exactly one grapheme after normalization
    #[error("Invalid table character: {0:?}")]
    InvalidCharacter(String),

    /// Source text could not be parsed into a table or pool
    #[error("Parse error: {0}")]
    ParseError(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StrokeError {
    /// Create a missing stroke data error
    pub fn missing(text: impl Into<String>, character: impl Into<String>) -> Self {
        Self::MissingStrokeData {
            text: text.into(),
            character: character.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

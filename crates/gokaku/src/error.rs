use thiserror::Error;

pub type Result<T> = std::result::Result<T, GokakuError>;

#[derive(Error, Debug)]
pub enum GokakuError {
    #[error("Invalid luck filter: {0:?} (expected all, good or excellent)")]
    InvalidLuckFilter(String),

    #[error("Invalid rank table: {0}")]
    InvalidRankTable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Family name is empty")]
    EmptyFamilyName,

    #[error("Family name '{family_name}' has no stroke data for '{character}'")]
    UnresolvableFamilyName {
        family_name: String,
        character: String,
    },

    #[error("Stroke table error: {0}")]
    StrokeError(#[from] seimei_strokes::StrokeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GokakuError {
    pub fn invalid_rank_table(msg: impl Into<String>) -> Self {
        Self::InvalidRankTable(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

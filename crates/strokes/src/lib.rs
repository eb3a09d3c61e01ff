//! # Seimei Strokes
//!
//! Character stroke-count tables and fail-closed stroke resolution.
//!
//! ```text
//! text ──NFC──> graphemes ──lookup──> Σ strokes
//!                              │
//!                              └─ missing ──> 0 + MissingStrokeData
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seimei_strokes::{CollectedDiagnostics, StrokeResolver, StrokeTable};
//!
//! let table = StrokeTable::from_entries([("田", 5), ("中", 4)]).unwrap();
//! let resolver = StrokeResolver::new(&table);
//! let mut diagnostics = CollectedDiagnostics::new();
//!
//! assert_eq!(resolver.resolve("田中", &mut diagnostics), 9);
//! assert_eq!(resolver.resolve("田村", &mut diagnostics), 0);
//! assert_eq!(diagnostics.missing_characters().collect::<Vec<_>>(), vec!["村"]);
//! ```

mod diagnostics;
mod error;
mod resolver;
mod table;
pub mod text;

pub use diagnostics::{
    CollectedDiagnostics, DiagnosticEvent, Diagnostics, LogDiagnostics, NoopDiagnostics,
    MAX_DETAIL_CHARS,
};
pub use error::{Result, StrokeError};
pub use resolver::StrokeResolver;
pub use table::StrokeTable;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, StrokeError};
use crate::text;

/// Immutable-by-convention mapping from a single grapheme to its stroke count.
///
/// Keys are stored in NFC so lookups with normalized graphemes always agree
/// with the way the table was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrokeTable {
    strokes: HashMap<String, u32>,
}

/// `"漢": 13,` pairs as they appear in a JavaScript master file.
const JS_PAIR_PATTERN: &str = r#""([^"]+)"\s*:\s*(-?[0-9]+)"#;

impl StrokeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting non-positive counts and multi-grapheme keys.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut table = Self::new();
        for (character, strokes) in entries {
            table.insert(character.as_ref(), strokes)?;
        }
        Ok(table)
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, character: &str, strokes: i64) -> Result<()> {
        let key = text::normalize(character);
        if text::grapheme_len(&key) != 1 {
            return Err(StrokeError::InvalidCharacter(character.to_string()));
        }
        let count = u32::try_from(strokes)
            .ok()
            .filter(|&count| count > 0)
            .ok_or_else(|| StrokeError::InvalidStrokeCount {
                character: character.to_string(),
                strokes,
            })?;
        self.strokes.insert(key, count);
        Ok(())
    }

    /// Stroke count for a single normalized grapheme.
    #[must_use]
    pub fn get(&self, grapheme: &str) -> Option<u32> {
        self.strokes.get(grapheme).copied()
    }

    #[must_use]
    pub fn contains(&self, grapheme: &str) -> bool {
        self.strokes.contains_key(grapheme)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Copy every entry of `overlay` into `self`; overlay counts win.
    ///
    /// Returns how many existing entries were replaced with a different count.
    pub fn merge(&mut self, overlay: &Self) -> usize {
        let mut replaced = 0;
        for (character, &strokes) in &overlay.strokes {
            if let Some(previous) = self.strokes.insert(character.clone(), strokes) {
                if previous != strokes {
                    log::debug!("Stroke count for '{character}' replaced: {previous} -> {strokes}");
                    replaced += 1;
                }
            }
        }
        replaced
    }

    /// Entries ordered by (strokes, character).
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .strokes
            .iter()
            .map(|(character, &strokes)| (character.as_str(), strokes))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Parse a JSON object of `{"character": strokes}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, i64> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Extract `"漢": 13` pairs from JavaScript master source.
    ///
    /// Keys that are not a single grapheme are skipped, matching how the
    /// generated master files were consumed.
    pub fn from_js_source(source: &str) -> Result<Self> {
        let pattern = Regex::new(JS_PAIR_PATTERN).map_err(|e| StrokeError::parse(e.to_string()))?;
        let mut table = Self::new();
        for caps in pattern.captures_iter(source) {
            let character = &caps[1];
            if text::grapheme_len(character) != 1 {
                log::debug!("Skipping non-character key {character:?}");
                continue;
            }
            let strokes: i64 = caps[2]
                .parse()
                .map_err(|e| StrokeError::parse(format!("stroke count for {character:?}: {e}")))?;
            table.insert(character, strokes)?;
        }
        if table.is_empty() {
            return Err(StrokeError::parse("no stroke entries found in source"));
        }
        Ok(table)
    }

    /// Load a table from disk. `.js` files are read as master source, everything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = match path.extension().and_then(|ext| ext.to_str()) {
            Some("js") => Self::from_js_source(&contents)?,
            _ => Self::from_json_str(&contents)?,
        };
        log::debug!("Loaded {} stroke entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// JSON object text, one entry per line, ordered by (strokes, character).
    pub fn to_json_pretty(&self) -> Result<String> {
        let entries = self.sorted_entries();
        let mut out = String::from("{\n");
        for (idx, (character, strokes)) in entries.iter().enumerate() {
            let key = serde_json::to_string(character)?;
            let separator = if idx + 1 == entries.len() { "" } else { "," };
            out.push_str(&format!("  {key}: {strokes}{separator}\n"));
        }
        out.push_str("}\n");
        Ok(out)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use seimei_strokes::text;

use crate::error::{GokakuError, Result};

/// Longest given name kept by [`NamePool::retain_valid`], in characters.
pub const MAX_GIVEN_NAME_CHARS: usize = 4;

const JS_ARRAY_PATTERN: &str = r"\[\s*([\s\S]*?)\s*\]";
const JS_STRING_PATTERN: &str = r#""([^"]+)""#;

/// Ordered list of candidate given names.
///
/// Entries are stored in NFC. Duplicates are kept unless [`dedup`](Self::dedup)
/// is called explicitly; candidate generation evaluates every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| text::normalize(name.as_ref().trim()))
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drop later duplicates, keeping first-occurrence order. Returns the
    /// number of entries removed.
    pub fn dedup(&mut self) -> usize {
        let before = self.names.len();
        let mut seen = HashSet::with_capacity(before);
        self.names.retain(|name| seen.insert(name.clone()));
        before - self.names.len()
    }

    /// Append `other` and dedup; entries of `self` keep their positions.
    pub fn merge(&mut self, other: &Self) -> usize {
        self.names.extend(other.names.iter().cloned());
        self.dedup()
    }

    /// Keep only names accepted by [`is_valid_given_name`]. Returns the
    /// number of entries removed.
    pub fn retain_valid(&mut self) -> usize {
        let before = self.names.len();
        self.names.retain(|name| is_valid_given_name(name));
        before - self.names.len()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let names: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(names))
    }

    /// One name per line; blank lines are skipped.
    #[must_use]
    pub fn from_text(contents: &str) -> Self {
        Self::new(contents.lines())
    }

    /// Quoted strings inside the first array literal of a JavaScript source.
    pub fn from_js_source(source: &str) -> Result<Self> {
        let array = Regex::new(JS_ARRAY_PATTERN).map_err(|e| GokakuError::parse(e.to_string()))?;
        let quoted = Regex::new(JS_STRING_PATTERN).map_err(|e| GokakuError::parse(e.to_string()))?;
        let body = array
            .captures(source)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| GokakuError::parse("no array literal found in name source"))?;
        Ok(Self::new(
            quoted
                .captures_iter(body.as_str())
                .filter_map(|caps| caps.get(1).map(|m| m.as_str())),
        ))
    }

    /// Load by extension: `.json` array, `.js` master source, anything else
    /// as plain text.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let pool = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            Some("js") => Self::from_js_source(&contents)?,
            _ => Self::from_text(&contents),
        };
        log::debug!("Loaded {} given names from {}", pool.len(), path.display());
        Ok(pool)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(&self.names)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

/// 1–4 characters after whitespace removal, all CJK unified ideographs.
#[must_use]
pub fn is_valid_given_name(name: &str) -> bool {
    let compact: Vec<char> = name.chars().filter(|c| !c.is_whitespace()).collect();
    (1..=MAX_GIVEN_NAME_CHARS).contains(&compact.len())
        && compact.iter().all(|c| ('\u{4E00}'..='\u{9FFF}').contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicates_are_kept_by_default() {
        let pool = NamePool::new(["太郎", "花子", "太郎"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_blank_entries_dropped() {
        let pool = NamePool::from_text("太郎\n\n  \n花子\n");
        assert_eq!(pool.names(), &["太郎".to_string(), "花子".to_string()]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut pool = NamePool::new(["蓮", "陽翔", "蓮", "結衣", "陽翔"]);
        assert_eq!(pool.dedup(), 2);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["蓮", "陽翔", "結衣"]);
    }

    #[test]
    fn test_merge_preserves_base_order() {
        let mut generated = NamePool::new(["蒼", "湊"]);
        let cleaned = NamePool::new(["湊", "碧", "蒼", "凛"]);
        assert_eq!(generated.merge(&cleaned), 2);
        assert_eq!(generated.iter().collect::<Vec<_>>(), vec!["蒼", "湊", "碧", "凛"]);
    }

    #[test]
    fn test_valid_given_names() {
        assert!(is_valid_given_name("翔"));
        assert!(is_valid_given_name("陽 翔"));
        assert!(is_valid_given_name("一二三四"));
        assert!(!is_valid_given_name(""));
        assert!(!is_valid_given_name("一二三四五"));
        assert!(!is_valid_given_name("さくら"));
        assert!(!is_valid_given_name("ユイ"));
        assert!(!is_valid_given_name("Ken"));
    }

    #[test]
    fn test_retain_valid() {
        let mut pool = NamePool::new(["さくら", "結衣", "Ken", "陽翔"]);
        assert_eq!(pool.retain_valid(), 2);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["結衣", "陽翔"]);
    }

    #[test]
    fn test_js_source_reads_first_array() {
        let source = r#"
const GIVEN_NAMES = [
  "蓮",
  "陽翔",
];

if (typeof window !== "undefined") {
  window.GIVEN_NAMES = GIVEN_NAMES;
}
"#;
        let pool = NamePool::from_js_source(source).unwrap();
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["蓮", "陽翔"]);
    }

    #[test]
    fn test_json_array() {
        let pool = NamePool::from_json_str(r#"["太郎", " 花子 "]"#).unwrap();
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["太郎", "花子"]);
        assert!(NamePool::from_json_str(r#"{"a": 1}"#).is_err());
    }
}

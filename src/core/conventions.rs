//! core::conventions
//!
//! Naming-convention table: asset class name -> prefix string.
//!
//! # File Format
//!
//! A comma-separated text file of alternating `ClassName,Prefix` tokens,
//! one or more pairs per line, no header row, no escaping:
//!
//! ```text
//! Blueprint,BP_
//! Material,M_,MaterialInstanceConstant,MI_
//! ```
//!
//! # Contract
//!
//! - Duplicate class names resolve last-write-wins.
//! - A line with an odd token count drops the trailing unmatched token;
//!   the drop is surfaced as a load warning.
//! - On file-read failure the caller logs the error and proceeds with an
//!   empty table (no asset is ever renamed).
//!
//! The table is loaded once at startup and read-only thereafter. There is
//! no retry and no invalidation short of restarting the process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::ClassName;

/// Errors from loading the conventions file.
#[derive(Debug, Error)]
pub enum ConventionsError {
    #[error("failed to read conventions file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A warning generated while parsing the conventions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number the warning refers to.
    pub line: usize,
    /// The warning message.
    pub message: String,
}

/// Result of loading the conventions file.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded table.
    pub conventions: NamingConventions,
    /// Warnings generated during parsing (dropped tokens).
    pub warnings: Vec<ParseWarning>,
}

/// Table mapping asset class names to required prefixes.
///
/// # Example
///
/// ```
/// use prefixer::core::conventions::NamingConventions;
/// use prefixer::core::types::ClassName;
///
/// let (table, warnings) = NamingConventions::parse("Blueprint,BP_\nMaterial,M_");
/// assert!(warnings.is_empty());
/// assert_eq!(table.len(), 2);
///
/// let class = ClassName::new("Blueprint").unwrap();
/// assert_eq!(table.prefix_for(&class), Some("BP_"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingConventions {
    map: HashMap<String, String>,
}

impl NamingConventions {
    /// Create an empty table. No class maps to any prefix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse conventions from CSV text.
    ///
    /// Never fails: malformed rows lose their trailing unmatched token,
    /// which is reported in the returned warnings.
    pub fn parse(text: &str) -> (Self, Vec<ParseWarning>) {
        let mut map = HashMap::new();
        let mut warnings = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            // Empty tokens are culled, matching the original file format
            // where ",," carries no meaning.
            let tokens: Vec<&str> = line
                .trim_end_matches('\r')
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();

            let mut pairs = tokens.chunks_exact(2);
            for pair in &mut pairs {
                map.insert(pair[0].to_string(), pair[1].to_string());
            }
            if let [orphan] = pairs.remainder() {
                warnings.push(ParseWarning {
                    line: idx + 1,
                    message: format!("dropping unmatched trailing token '{}'", orphan),
                });
            }
        }

        (Self { map }, warnings)
    }

    /// Load conventions from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConventionsError::ReadError` if the file cannot be read.
    /// Callers are expected to log the failure and continue with
    /// [`NamingConventions::empty`].
    pub fn load(path: &Path) -> Result<LoadResult, ConventionsError> {
        let text = fs::read_to_string(path).map_err(|source| ConventionsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let (conventions, warnings) = Self::parse(&text);
        Ok(LoadResult {
            conventions,
            warnings,
        })
    }

    /// Look up the configured prefix for a class.
    ///
    /// Pure lookup, no side effects. Returns `None` for unmapped classes.
    pub fn prefix_for(&self, class: &ClassName) -> Option<&str> {
        self.map.get(class.as_str()).map(String::as_str)
    }

    /// Number of configured classes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(class, prefix)` entries sorted by class name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> ClassName {
        ClassName::new(name).unwrap()
    }

    #[test]
    fn parse_one_pair_per_line() {
        let (table, warnings) = NamingConventions::parse("Blueprint,BP_\nMaterial,M_");
        assert!(warnings.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table.prefix_for(&class("Blueprint")), Some("BP_"));
        assert_eq!(table.prefix_for(&class("Material")), Some("M_"));
    }

    #[test]
    fn parse_multiple_pairs_per_line() {
        let (table, _) =
            NamingConventions::parse("Blueprint,BP_,Material,M_,MaterialInstanceConstant,MI_");
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.prefix_for(&class("MaterialInstanceConstant")),
            Some("MI_")
        );
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let (table, _) = NamingConventions::parse("Blueprint,BP_\nBlueprint,BPX_");
        assert_eq!(table.len(), 1);
        assert_eq!(table.prefix_for(&class("Blueprint")), Some("BPX_"));
    }

    #[test]
    fn odd_token_count_drops_trailing() {
        let (table, warnings) = NamingConventions::parse("Blueprint,BP_,Material");
        assert_eq!(table.len(), 1);
        assert_eq!(table.prefix_for(&class("Blueprint")), Some("BP_"));
        assert_eq!(table.prefix_for(&class("Material")), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line, 1);
        assert!(warnings[0].message.contains("Material"));
    }

    #[test]
    fn empty_tokens_are_culled() {
        let (table, warnings) = NamingConventions::parse("Blueprint,,BP_");
        assert!(warnings.is_empty());
        assert_eq!(table.prefix_for(&class("Blueprint")), Some("BP_"));
    }

    #[test]
    fn tokens_are_trimmed() {
        let (table, _) = NamingConventions::parse("Blueprint , BP_");
        assert_eq!(table.prefix_for(&class("Blueprint")), Some("BP_"));
    }

    #[test]
    fn crlf_line_endings() {
        let (table, warnings) = NamingConventions::parse("Blueprint,BP_\r\nMaterial,M_\r\n");
        assert!(warnings.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table.prefix_for(&class("Material")), Some("M_"));
    }

    #[test]
    fn empty_text_yields_empty_table() {
        let (table, warnings) = NamingConventions::parse("");
        assert!(table.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn unmapped_class_is_none() {
        let (table, _) = NamingConventions::parse("Blueprint,BP_");
        assert_eq!(table.prefix_for(&class("Texture2D")), None);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let result = NamingConventions::load(Path::new("/nonexistent/NamingConventions.csv"));
        assert!(matches!(result, Err(ConventionsError::ReadError { .. })));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NamingConventions.csv");
        fs::write(&path, "Blueprint,BP_\nMaterial,M_\n").unwrap();

        let result = NamingConventions::load(&path).unwrap();
        assert_eq!(result.conventions.len(), 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn entries_are_sorted() {
        let (table, _) = NamingConventions::parse("Material,M_\nBlueprint,BP_");
        assert_eq!(
            table.entries(),
            vec![("Blueprint", "BP_"), ("Material", "M_")]
        );
    }
}

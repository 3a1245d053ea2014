use emojisearch_common::{EmojiSearchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::normalize::normalize;

/// Raw catalog record as read from the catalog source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmojiRecord {
    /// Emoji character
    pub emoji: String,

    /// Primary English label
    pub label: String,

    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One searchable catalog entry
///
/// `description` contains only lowercase ASCII letters and whitespace.
/// Entries are positionally aligned with the rows of the vector index, so
/// the build order is load-bearing and must never change after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Emoji character
    pub symbol: String,

    /// Normalized label plus aliases, space-separated
    pub description: String,
}

/// Load raw catalog records from a JSON file
pub fn load_catalog(path: &Path) -> Result<Vec<RawEmojiRecord>> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        EmojiSearchError::catalog(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    let records: Vec<RawEmojiRecord> = serde_json::from_str(&data).map_err(|e| {
        EmojiSearchError::catalog(format!(
            "Failed to parse catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(records)
}

/// Build ordered catalog entries from raw records
///
/// Records whose label normalizes to an empty string are skipped with a
/// warning. Duplicate symbols are kept as independent positional entries.
pub fn build_catalog(records: &[RawEmojiRecord]) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let mut description = normalize(&record.label);
        if description.trim().is_empty() {
            warn!("Skipping catalog record with empty label: {}", record.emoji);
            continue;
        }

        for alias in &record.aliases {
            let alias = normalize(alias);
            description.push(' ');
            description.push_str(&alias);
        }

        entries.push(CatalogEntry {
            symbol: record.emoji.clone(),
            description,
        });
    }

    if entries.is_empty() {
        return Err(EmojiSearchError::catalog(
            "Catalog produced no usable entries",
        ));
    }

    info!("Loaded {} emojis", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(emoji: &str, label: &str, aliases: &[&str]) -> RawEmojiRecord {
        RawEmojiRecord {
            emoji: emoji.to_string(),
            label: label.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_build_basic_entry() {
        let entries = build_catalog(&[record("😀", "Grinning Face", &[])]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symbol, "😀");
        assert_eq!(entries[0].description, "grinning face");
    }

    #[test]
    fn test_aliases_appended_in_order() {
        let entries =
            build_catalog(&[record("😂", "face with tears of joy", &["lol", "funny!"])]).unwrap();
        assert_eq!(entries[0].description, "face with tears of joy lol funny");
    }

    #[test]
    fn test_empty_label_skipped() {
        let entries = build_catalog(&[
            record("🔢", "123", &["numbers"]),
            record("😀", "grinning face", &[]),
        ])
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symbol, "😀");
    }

    #[test]
    fn test_empty_catalog_fails() {
        let err = build_catalog(&[]).unwrap_err();
        assert!(matches!(
            err,
            EmojiSearchError::CatalogUnavailable(_)
        ));
    }

    #[test]
    fn test_duplicate_symbols_kept() {
        let entries = build_catalog(&[
            record("😀", "grinning face", &[]),
            record("😀", "happy face", &[]),
        ])
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "grinning face");
        assert_eq!(entries[1].description, "happy face");
    }

    #[test]
    fn test_order_preserved() {
        let entries = build_catalog(&[
            record("a", "alpha", &[]),
            record("b", "beta", &[]),
            record("c", "gamma", &[]),
        ])
        .unwrap();
        let symbols: Vec<_> = entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["a", "b", "c"]);
    }

    #[test]
    fn test_description_charset() {
        let entries =
            build_catalog(&[record("😀", "Grinning FACE (no. 1)!", &["HAPPY-100"])]).unwrap();
        assert!(entries[0]
            .description
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
    }
}

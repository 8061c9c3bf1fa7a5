//! # Resource File IO
//!
//! JSON loading and saving for translations dictionaries, rule
//! declarations, and the examples index. Files are opened and released
//! here, before analysis runs; the core holds only in-memory structures.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{SLResult, StenolexError};
use crate::rules::{strip_line_comments, RawRulesMap};
use crate::types::{ExamplesIndex, TranslationsDict};

/// Load and merge one or more JSON translations dictionaries.
///
/// Entries with empty outline strings are skipped silently; empty letters
/// are allowed. Later files win on duplicate outlines.
pub fn load_json_translations<P: AsRef<Path>>(paths: &[P]) -> SLResult<TranslationsDict> {
    let mut merged = TranslationsDict::new();
    for path in paths {
        let text = std::fs::read_to_string(path)?;
        let dict: TranslationsDict = serde_json::from_str(&text)?;
        for (keys, letters) in dict {
            if keys.is_empty() {
                continue;
            }
            merged.insert(keys, letters);
        }
    }
    Ok(merged)
}

/// Load and merge one or more JSON rule declaration files (full-line `#` /
/// `//` comments allowed). Declaring the same rule id twice is an error.
pub fn load_raw_rules<P: AsRef<Path>>(paths: &[P]) -> SLResult<RawRulesMap> {
    let mut merged = RawRulesMap::new();
    for path in paths {
        let text = std::fs::read_to_string(path)?;
        let raw: RawRulesMap = serde_json::from_str(&strip_line_comments(&text))?;
        for (id, fields) in raw {
            if merged.insert(id.clone(), fields).is_some() {
                return Err(StenolexError::DuplicateRule { id });
            }
        }
    }
    Ok(merged)
}

/// Save an examples index as pretty-printed JSON.
///
/// Keys are sorted at every level and non-ASCII text is preserved, so
/// successive runs diff cleanly.
pub fn save_json_index<P: AsRef<Path>>(path: P, index: &ExamplesIndex) -> SLResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, index)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("stenolex-io-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_translations_merges_and_skips_empty_keys() {
        let first = write_temp("a.json", r#"{"TEFT": "test", "": "dropped"}"#);
        let second = write_temp("b.json", r#"{"TEFT": "tested", "S": ""}"#);
        let merged = load_json_translations(&[&first, &second]).unwrap();
        assert_eq!(merged.len(), 2);
        // Later files win; empty letters survive.
        assert_eq!(merged["TEFT"], "tested");
        assert_eq!(merged["S"], "");
        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }

    #[test]
    fn test_load_raw_rules_rejects_duplicates() {
        let first = write_temp("r1.json", r#"{"t": ["T", "t"]}"#);
        let second = write_temp("r2.json", r#"{"t": ["T", "t"]}"#);
        let err = load_raw_rules(&[&first, &second]).unwrap_err();
        assert!(matches!(err, StenolexError::DuplicateRule { id } if id == "t"));
        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }

    #[test]
    fn test_save_index_sorted_and_unescaped() {
        let mut index = ExamplesIndex::new();
        index
            .entry("zz".to_string())
            .or_default()
            .insert("TEFT".to_string(), "test".to_string());
        index
            .entry("aa".to_string())
            .or_default()
            .insert("KAFR".to_string(), "caf\u{e9}".to_string());
        let path = write_temp("index.json", "");
        save_json_index(&path, &index).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.find("\"aa\"").unwrap() < text.find("\"zz\"").unwrap());
        assert!(text.contains("caf\u{e9}"));
        std::fs::remove_file(path).ok();
    }
}

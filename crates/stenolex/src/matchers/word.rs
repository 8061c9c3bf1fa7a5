//! # Whole-Word Matcher

use std::sync::Arc;

use crate::matchers::{RuleMatch, RuleMatcher};
use crate::rules::LexerRule;
use crate::types::CommonHashMap;

/// Matches rules against the next whitespace-delimited word exactly, plus a
/// prefix of the current keys.
pub struct WordMatcher {
    rules_by_word: CommonHashMap<String, Arc<LexerRule>>,
}

impl WordMatcher {
    /// An empty matcher.
    pub fn new() -> Self {
        Self {
            rules_by_word: CommonHashMap::default(),
        }
    }

    /// Register a rule under its whole-word letters.
    pub fn add(&mut self, rule: Arc<LexerRule>) {
        self.rules_by_word.insert(rule.letters.clone(), rule);
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleMatcher for WordMatcher {
    fn matches(
        &self,
        skeys: &str,
        letters: &str,
        all_skeys: &str,
        _all_letters: &str,
    ) -> Vec<RuleMatch> {
        // A complete word is next only if we just started or the letter
        // pointer is sitting on a space.
        if skeys.len() != all_skeys.len() && !letters.starts_with(' ') {
            return Vec::new();
        }
        let lower = letters.to_lowercase();
        let Some(first_word) = lower.split_whitespace().next() else {
            return Vec::new();
        };
        if let Some(rule) = self.rules_by_word.get(first_word) {
            if skeys.starts_with(&rule.skeys) {
                // find() cannot miss: first_word came out of lower.
                let offset = lower.find(first_word).unwrap_or(0);
                return vec![RuleMatch {
                    rule: rule.clone(),
                    remaining_skeys: skeys[rule.skeys.len()..].to_string(),
                    letter_offset: offset,
                }];
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyLayout;
    use crate::rules::RuleDatabase;

    fn matcher() -> WordMatcher {
        let layout = KeyLayout::english();
        let db = RuleDatabase::parse(
            r#"{"the": ["-T", "the", "word"]}"#,
            &layout,
        )
        .unwrap();
        let mut matcher = WordMatcher::new();
        matcher.add(db.get("the").unwrap().clone());
        matcher
    }

    #[test]
    fn test_word_at_start() {
        let m = matcher();
        let found = m.matches("t/EPBd", "the end", "t/EPBd", "the end");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].remaining_skeys, "/EPBd");
        assert_eq!(found[0].letter_offset, 0);
    }

    #[test]
    fn test_word_after_space() {
        let m = matcher();
        let found = m.matches("t", " the", "EPBd/t", "end the");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].letter_offset, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher();
        let found = m.matches("t/EPBd", "The end", "t/EPBd", "The end");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_requires_word_boundary() {
        let m = matcher();
        // Mid-word: head letters do not start with a space and keys moved.
        assert!(m.matches("t", "he", "SOt", "she").is_empty());
    }

    #[test]
    fn test_requires_key_prefix() {
        let m = matcher();
        assert!(m.matches("PW", "the", "PW", "the").is_empty());
    }
}

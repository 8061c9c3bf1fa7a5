//! # Full-Stroke Matcher

use std::sync::Arc;

use crate::matchers::{at_stroke_boundary, first_stroke, RuleMatch, RuleMatcher};
use crate::rules::LexerRule;
use crate::types::CommonHashMap;

/// Matches rules against the next full stroke exactly, plus a subset of the
/// current letters.
pub struct StrokeMatcher {
    sep: char,
    rules_by_stroke: CommonHashMap<String, Arc<LexerRule>>,
}

impl StrokeMatcher {
    /// An empty matcher for the given stroke separator.
    pub fn new(sep: char) -> Self {
        Self {
            sep,
            rules_by_stroke: CommonHashMap::default(),
        }
    }

    /// Register a rule under its complete-stroke keys.
    pub fn add(&mut self, rule: Arc<LexerRule>) {
        self.rules_by_stroke.insert(rule.skeys.clone(), rule);
    }
}

impl RuleMatcher for StrokeMatcher {
    fn matches(
        &self,
        skeys: &str,
        letters: &str,
        all_skeys: &str,
        _all_letters: &str,
    ) -> Vec<RuleMatch> {
        // A complete stroke is next only if we just started or a stroke
        // separator was just crossed.
        if !at_stroke_boundary(skeys, all_skeys, self.sep) {
            return Vec::new();
        }
        let stroke = first_stroke(skeys, self.sep);
        if let Some(rule) = self.rules_by_stroke.get(stroke) {
            let lower = letters.to_lowercase();
            if let Some(offset) = lower.find(&rule.letters) {
                return vec![RuleMatch {
                    rule: rule.clone(),
                    remaining_skeys: skeys[stroke.len()..].to_string(),
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

    fn matcher() -> StrokeMatcher {
        let layout = KeyLayout::english();
        let db = RuleDatabase::parse(
            r#"{"test": ["TEFT", "test", "stroke"]}"#,
            &layout,
        )
        .unwrap();
        let mut matcher = StrokeMatcher::new(layout.sep());
        matcher.add(db.get("test").unwrap().clone());
        matcher
    }

    #[test]
    fn test_whole_stroke_match() {
        let m = matcher();
        let found = m.matches("TEft", "test", "TEft", "test");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule.id, "test");
        assert_eq!(found[0].remaining_skeys, "");
        assert_eq!(found[0].letter_offset, 0);
    }

    #[test]
    fn test_match_inside_outline() {
        let m = matcher();
        // Head sits right after a separator; letters offset skips the space.
        let found = m.matches("TEft", " test", "PHRfr/TEft", "plover test");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].letter_offset, 1);
    }

    #[test]
    fn test_requires_stroke_boundary() {
        let m = matcher();
        // Head begins mid-stroke: the preceding character is a key.
        assert!(m.matches("TEft", "test", "STEft", "stest").is_empty());
    }

    #[test]
    fn test_requires_letter_subset() {
        let m = matcher();
        assert!(m.matches("TEft", "zzz", "TEft", "zzz").is_empty());
    }

    #[test]
    fn test_partial_stroke_is_not_matched() {
        let m = matcher();
        assert!(m.matches("TEf", "test", "TEf", "test").is_empty());
    }
}

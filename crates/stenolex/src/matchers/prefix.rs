//! # Prefix Matcher

use std::sync::Arc;

use crate::matchers::{first_stroke, RuleMatch, RuleMatcher};
use crate::rules::LexerRule;
use crate::support::PrefixTree;

/// Matches rules whose keys lead the remaining keys in order, with a
/// configured subset of keys permitted to sit anywhere within the first
/// stroke.
///
/// Both rule keys and query heads are normalized by stably sorting the
/// unordered keys of the first stroke to its back, so a plain prefix walk
/// finds every candidate regardless of where those keys actually sit.
pub struct PrefixMatcher {
    sep: char,
    unordered: Vec<char>,
    tree: PrefixTree<Arc<LexerRule>>,
}

impl PrefixMatcher {
    /// An empty matcher for the given separator and unordered key set.
    pub fn new(sep: char, unordered: &[char]) -> Self {
        Self {
            sep,
            unordered: unordered.to_vec(),
            tree: PrefixTree::new(),
        }
    }

    /// Register a rule under its normalized keys.
    pub fn add(&mut self, rule: Arc<LexerRule>) {
        self.tree.insert(&self.normalize(&rule.skeys), rule);
    }

    /// Finalize the underlying tree. Must be called once, after the last
    /// [`add`](Self::add).
    pub fn compile(&mut self) {
        self.tree.compile();
    }

    fn is_unordered(&self, key: char) -> bool {
        self.unordered.contains(&key)
    }

    /// Stably sort the unordered keys of the first stroke to its back.
    fn normalize(&self, skeys: &str) -> String {
        let stroke = first_stroke(skeys, self.sep);
        let mut out: String = stroke.chars().filter(|c| !self.is_unordered(*c)).collect();
        out.extend(stroke.chars().filter(|c| self.is_unordered(*c)));
        out.push_str(&skeys[stroke.len()..]);
        out
    }

    /// Remove the rule's keys from the head. Unordered keys come out at
    /// their first occurrence anywhere in the current stroke; ordered keys
    /// come off the front, skipping over unordered keys still in place.
    /// Returns `None` when the keys cannot be reconciled.
    fn consume(&self, skeys: &str, rule_skeys: &str) -> Option<String> {
        let mut rest: Vec<char> = skeys.chars().collect();
        for key in rule_skeys.chars() {
            if key == self.sep {
                if rest.first() == Some(&self.sep) {
                    rest.remove(0);
                } else {
                    return None;
                }
                continue;
            }
            let stroke_end = rest
                .iter()
                .position(|&c| c == self.sep)
                .unwrap_or(rest.len());
            if self.is_unordered(key) {
                let idx = rest[..stroke_end].iter().position(|&c| c == key)?;
                rest.remove(idx);
            } else {
                let mut i = 0;
                while i < stroke_end && self.is_unordered(rest[i]) {
                    i += 1;
                }
                if i < stroke_end && rest[i] == key {
                    rest.remove(i);
                } else {
                    return None;
                }
            }
        }
        Some(rest.into_iter().collect())
    }
}

impl RuleMatcher for PrefixMatcher {
    fn matches(
        &self,
        skeys: &str,
        letters: &str,
        _all_skeys: &str,
        _all_letters: &str,
    ) -> Vec<RuleMatch> {
        if skeys.is_empty() {
            return Vec::new();
        }
        let lower = letters.to_lowercase();
        let probe = self.normalize(skeys);
        let mut found = Vec::new();
        for rule in self.tree.lookup(&probe) {
            let Some(offset) = lower.find(&rule.letters) else {
                continue;
            };
            let Some(remaining) = self.consume(skeys, &rule.skeys) else {
                continue;
            };
            found.push(RuleMatch {
                rule: rule.clone(),
                remaining_skeys: remaining,
                letter_offset: offset,
            });
        }
        found
    }
}

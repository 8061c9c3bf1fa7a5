//! # Special Rule Matcher
//!
//! A handful of rules explain keys that carry no letters of their own: a
//! leftover asterisk marking an abbreviation, a proper noun, an affix, or
//! nothing identifiable at all. They are tied to well-known rule ids and
//! matched by custom predicates instead of key/letter tables.

use std::sync::Arc;

use crate::matchers::{first_stroke, RuleMatch, RuleMatcher};
use crate::rules::LexerRule;

/// Special rule behaviors, selected by rule id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    /// The translation reads as an abbreviation.
    Abbreviation,
    /// The translation reads as a proper noun.
    ProperNoun,
    /// The translation carries an affix marker at its edge.
    Affix,
    /// Nothing else applies; consume the stroke and move on.
    Fallback,
}

/// Rule ids with hard-coded lexer behavior, and the behavior each selects.
pub const SPECIAL_IDS: [(&str, SpecialKind); 4] = [
    ("~ABBR", SpecialKind::Abbreviation),
    ("~PROP", SpecialKind::ProperNoun),
    ("~PFSF", SpecialKind::Affix),
    ("~????", SpecialKind::Fallback),
];

/// The special behavior registered for a rule id, if any.
pub fn special_kind(id: &str) -> Option<SpecialKind> {
    SPECIAL_IDS
        .iter()
        .find(|(special_id, _)| *special_id == id)
        .map(|(_, kind)| *kind)
}

/// The default affix marker when a rule's own letters do not carry one.
const DEFAULT_AFFIX_MARKER: char = '^';

/// Matches special rules when the current stroke holds nothing but
/// unordered keys (typically a lone `*`). Each match consumes that stroke
/// with zero letters.
pub struct SpecialMatcher {
    sep: char,
    unordered: Vec<char>,
    rules: Vec<(SpecialKind, Arc<LexerRule>, char)>,
}

impl SpecialMatcher {
    /// An empty matcher for the given separator and unordered key set.
    pub fn new(sep: char, unordered: &[char]) -> Self {
        Self {
            sep,
            unordered: unordered.to_vec(),
            rules: Vec::new(),
        }
    }

    /// Register a rule under one of the special behaviors.
    ///
    /// For [`SpecialKind::Affix`], the marker character is taken from the
    /// rule's own letters when they carry a non-alphanumeric character.
    pub fn add(&mut self, kind: SpecialKind, rule: Arc<LexerRule>) {
        let marker = rule
            .letters
            .chars()
            .find(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .unwrap_or(DEFAULT_AFFIX_MARKER);
        self.rules.push((kind, rule, marker));
    }
}

impl RuleMatcher for SpecialMatcher {
    fn matches(
        &self,
        skeys: &str,
        _letters: &str,
        _all_skeys: &str,
        all_letters: &str,
    ) -> Vec<RuleMatch> {
        let stroke = first_stroke(skeys, self.sep);
        if stroke.is_empty() || !stroke.chars().all(|c| self.unordered.contains(&c)) {
            return Vec::new();
        }
        let remaining = &skeys[stroke.len()..];
        let word = all_letters.trim();
        let mut found = Vec::new();
        for (kind, rule, marker) in &self.rules {
            let hit = match kind {
                SpecialKind::Abbreviation => is_abbreviation(word),
                SpecialKind::ProperNoun => {
                    word.chars().next().is_some_and(|c| c.is_uppercase())
                }
                SpecialKind::Affix => {
                    word.starts_with(*marker) || word.ends_with(*marker)
                }
                SpecialKind::Fallback => true,
            };
            if hit {
                found.push(RuleMatch {
                    rule: rule.clone(),
                    remaining_skeys: remaining.to_string(),
                    letter_offset: 0,
                });
            }
        }
        found
    }
}

/// An uppercase run of at least two letters, or a single capital followed
/// by a period.
fn is_abbreviation(word: &str) -> bool {
    if let Some(stem) = word.strip_suffix('.') {
        let mut chars = stem.chars();
        return matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    }
    word.chars().count() >= 2 && word.chars().all(|c| c.is_uppercase())
}

//! # Rule Matchers
//!
//! Four matcher families cover the rule categories: prefix (trie-backed,
//! the default), full-stroke, whole-word, and special. The search engine
//! consults them in that order and takes every match each one produces.

mod prefix;
mod special;
mod stroke;
mod word;

pub use prefix::PrefixMatcher;
pub use special::{special_kind, SpecialKind, SpecialMatcher};
pub use stroke::StrokeMatcher;
pub use word::WordMatcher;

use std::sync::Arc;

use crate::rules::LexerRule;

/// A single successful rule application against a query head.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    /// The matched rule.
    pub rule: Arc<LexerRule>,
    /// Keys left over after removing the rule's keys from the head.
    pub remaining_skeys: String,
    /// Byte offset of the rule's letters within the letters head.
    pub letter_offset: usize,
}

/// Matches steno rules using a rule's s-keys and/or letters.
///
/// `skeys` and `letters` are the unmatched tails of the query;
/// `all_skeys` and `all_letters` are the full query strings, consulted for
/// stroke- and word-boundary checks.
pub trait RuleMatcher {
    /// Produce every match of this matcher's rules against the current head.
    fn matches(
        &self,
        skeys: &str,
        letters: &str,
        all_skeys: &str,
        all_letters: &str,
    ) -> Vec<RuleMatch>;
}

/// True when `skeys` starts at a stroke boundary of `all_skeys`: either the
/// whole query is still ahead, or the character preceding the head is the
/// stroke separator.
pub(crate) fn at_stroke_boundary(skeys: &str, all_skeys: &str, sep: char) -> bool {
    if skeys.len() == all_skeys.len() {
        return true;
    }
    let Some(boundary) = all_skeys.len().checked_sub(skeys.len() + sep.len_utf8()) else {
        return false;
    };
    all_skeys.is_char_boundary(boundary) && all_skeys[boundary..].starts_with(sep)
}

/// The first stroke of an s-keys tail, exclusive of any separator.
pub(crate) fn first_stroke(skeys: &str, sep: char) -> &str {
    skeys.split(sep).next().unwrap_or("")
}

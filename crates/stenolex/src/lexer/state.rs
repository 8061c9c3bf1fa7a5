//! # Lexer States

use std::sync::Arc;

use crate::rules::LexerRule;

/// The lexer's position at some point mid-search. States are cheap value
/// types: children are derived, never mutated in place.
#[derive(Debug, Clone)]
pub(crate) struct LexerState {
    /// Keys not yet matched, in s-keys form.
    pub skeys: String,
    /// Matched rules, each with the letter offset where it starts.
    pub rules: Vec<(Arc<LexerRule>, usize)>,
    /// Number of letter bytes consumed so far; monotonic non-decreasing.
    pub cursor: usize,
}

impl LexerState {
    /// The starting state: everything unmatched.
    pub fn initial(skeys: &str) -> Self {
        Self {
            skeys: skeys.to_string(),
            rules: Vec::new(),
            cursor: 0,
        }
    }

    /// Derive a child state with one more rule matched.
    pub fn with_match(
        &self,
        rule: Arc<LexerRule>,
        remaining_skeys: String,
        letter_offset: usize,
    ) -> Self {
        let start = self.cursor + letter_offset;
        let cursor = start + rule.letters.len();
        let mut rules = self.rules.clone();
        rules.push((rule, start));
        Self {
            skeys: remaining_skeys,
            rules,
            cursor,
        }
    }

    /// Total letters matched, summed over the state's rules.
    pub fn letters_matched(&self) -> usize {
        self.rules.iter().map(|(rule, _)| rule.letters.len()).sum()
    }

    /// How many matched rules are flagged rare.
    pub fn rare_count(&self) -> usize {
        self.rules.iter().filter(|(rule, _)| rule.flags.rare).count()
    }

    /// A state is complete when no keys are left unmatched.
    pub fn is_complete(&self) -> bool {
        self.skeys.is_empty()
    }
}

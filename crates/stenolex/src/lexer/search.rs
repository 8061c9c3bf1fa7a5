//! # Lexer Search

use std::sync::Arc;

use crate::lexer::{ranking, LexerState};
use crate::matchers::{
    PrefixMatcher, RuleMatcher, SpecialMatcher, StrokeMatcher, WordMatcher,
};
use crate::rules::LexerRule;

/// Outcome of a lexer query.
#[derive(Debug, Clone)]
pub struct LexerResult {
    /// Keys the search could not explain, in s-keys form.
    pub unmatched_skeys: String,
    /// Matched rules in application order.
    pub rules: Vec<Arc<LexerRule>>,
    /// Letter byte offset where each matched rule starts.
    pub positions: Vec<usize>,
}

impl LexerResult {
    /// A result is complete when every key was matched.
    pub fn is_complete(&self) -> bool {
        self.unmatched_skeys.is_empty()
    }
}

/// The main analysis engine. Operates only on s-keys.
///
/// Uses trial-and-error stack analysis to gather every decomposition the
/// matchers can produce, then ranks them to find the one most likely to be
/// correct. Cycles are impossible: every match either shortens the
/// unmatched keys or advances the letter cursor.
pub struct StenoLexer {
    sep: char,
    prefix: PrefixMatcher,
    stroke: StrokeMatcher,
    word: WordMatcher,
    special: SpecialMatcher,
    fallback: Option<Arc<LexerRule>>,
}

impl StenoLexer {
    /// Assemble a lexer from loaded matchers.
    ///
    /// `fallback` is the rule attached to otherwise rule-less results so a
    /// query never comes back empty-handed.
    pub fn new(
        sep: char,
        prefix: PrefixMatcher,
        stroke: StrokeMatcher,
        word: WordMatcher,
        special: SpecialMatcher,
        fallback: Option<Arc<LexerRule>>,
    ) -> Self {
        Self {
            sep,
            prefix,
            stroke,
            word,
            special,
            fallback,
        }
    }

    /// Decompose `skeys` against `letters` and return the best result.
    pub fn query(&self, skeys: &str, letters: &str) -> LexerResult {
        let terminals = self.search(skeys, letters);
        // The initial state is terminal when nothing matches, so the batch
        // is never empty.
        let best = match ranking::find_best(&terminals) {
            Some(state) => state,
            None => return self.empty_result(skeys),
        };

        let mut rules: Vec<Arc<LexerRule>> = Vec::with_capacity(best.rules.len());
        let mut positions = Vec::with_capacity(best.rules.len());
        for (rule, start) in &best.rules {
            rules.push(rule.clone());
            positions.push(*start);
        }
        if rules.is_empty() && !best.is_complete() {
            // Nothing matched anywhere: surface the fallback rule rather
            // than an empty decomposition.
            if let Some(fallback) = &self.fallback {
                rules.push(fallback.clone());
                positions.push(0);
            }
        }
        LexerResult {
            unmatched_skeys: best.skeys.clone(),
            rules,
            positions,
        }
    }

    /// Index of the most accurate translation among `pairs` of
    /// `(skeys, letters)` candidates sharing a word.
    pub fn find_best_translation(&self, pairs: &[(String, String)]) -> usize {
        let bests: Vec<LexerState> = pairs
            .iter()
            .map(|(skeys, letters)| {
                let terminals = self.search(skeys, letters);
                ranking::find_best(&terminals)
                    .cloned()
                    .unwrap_or_else(|| LexerState::initial(skeys))
            })
            .collect();
        ranking::find_best_index(&bests)
    }

    /// Exhaustive depth-first expansion. Every terminal state is collected;
    /// path costs are judged only at the end, on terminals.
    fn search(&self, all_skeys: &str, all_letters: &str) -> Vec<LexerState> {
        let mut terminals = Vec::new();
        let mut stack = vec![LexerState::initial(all_skeys)];
        while let Some(mut state) = stack.pop() {
            // Align to the next stroke head.
            if state.skeys.starts_with(self.sep) {
                state.skeys.remove(0);
            }
            let letters_head = &all_letters[state.cursor..];

            let mut children = 0;
            for found in self.matches_for(&state.skeys, letters_head, all_skeys, all_letters) {
                // Offsets are measured in a lowercased copy; anything that
                // does not land back on a char boundary of the original
                // letters is unusable.
                let start = state.cursor + found.letter_offset;
                let cursor_after = start + found.rule.letters.len();
                if cursor_after > all_letters.len()
                    || !all_letters.is_char_boundary(start)
                    || !all_letters.is_char_boundary(cursor_after)
                    || found.remaining_skeys.len() > state.skeys.len()
                {
                    continue;
                }
                stack.push(state.with_match(
                    found.rule,
                    found.remaining_skeys,
                    found.letter_offset,
                ));
                children += 1;
            }
            if children == 0 {
                terminals.push(state);
            }
        }
        terminals
    }

    /// Run the matchers in attempt order. Specials only get a look when no
    /// other matcher produced anything for this head.
    fn matches_for(
        &self,
        skeys: &str,
        letters: &str,
        all_skeys: &str,
        all_letters: &str,
    ) -> Vec<crate::matchers::RuleMatch> {
        if skeys.is_empty() {
            return Vec::new();
        }
        let mut found = self.prefix.matches(skeys, letters, all_skeys, all_letters);
        found.extend(self.stroke.matches(skeys, letters, all_skeys, all_letters));
        found.extend(self.word.matches(skeys, letters, all_skeys, all_letters));
        if found.is_empty() {
            found = self.special.matches(skeys, letters, all_skeys, all_letters);
        }
        found
    }

    fn empty_result(&self, skeys: &str) -> LexerResult {
        LexerResult {
            unmatched_skeys: skeys.to_string(),
            rules: Vec::new(),
            positions: Vec::new(),
        }
    }
}

//! # Decomposition Ranking

use std::cmp::Ordering;

use crate::lexer::LexerState;

/// Total order over terminal states: `Greater` means `a` is the better
/// decomposition. The first non-zero criterion decides:
///
/// 1. fewest keys unmatched;
/// 2. most letters matched;
/// 3. fewest rare rules;
/// 4. fewest rules (a coarser decomposition explains more per rule).
pub(crate) fn compare(a: &LexerState, b: &LexerState) -> Ordering {
    b.skeys
        .len()
        .cmp(&a.skeys.len())
        .then_with(|| a.letters_matched().cmp(&b.letters_matched()))
        .then_with(|| b.rare_count().cmp(&a.rare_count()))
        .then_with(|| b.rules.len().cmp(&a.rules.len()))
}

/// The best state of a batch; remaining ties go to the earliest state.
pub(crate) fn find_best(states: &[LexerState]) -> Option<&LexerState> {
    let mut best: Option<&LexerState> = None;
    for state in states {
        match best {
            Some(current) if compare(state, current) != Ordering::Greater => {}
            _ => best = Some(state),
        }
    }
    best
}

/// Index of the best state in a batch where each entry is already the best
/// terminal of one candidate translation. Unmatched keys are clamped to at
/// most one beforehand, so candidates with *any* leftover keys compete
/// equally on the other criteria rather than favoring short outlines.
pub(crate) fn find_best_index(bests: &[LexerState]) -> usize {
    let clamped: Vec<LexerState> = bests
        .iter()
        .map(|state| {
            let mut state = state.clone();
            let keep = state.skeys.chars().next().map_or(0, char::len_utf8);
            state.skeys.truncate(keep);
            state
        })
        .collect();
    let Some(best) = find_best(&clamped) else {
        return 0;
    };
    clamped
        .iter()
        .position(|state| std::ptr::eq(state, best))
        .unwrap_or(0)
}

//! # Lexer Rules

use crate::rules::RuleFlags;

/// A named mapping from a steno key fragment to a letter fragment.
///
/// Rules come out of the database fully resolved: the `skeys` form and the
/// weight are derived at load time, and pattern references are already
/// flattened into `letters`.
#[derive(Debug)]
pub struct LexerRule {
    /// Stable identifier, unique across the database.
    pub id: String,
    /// Matched keys in RTFCRE form, as declared.
    pub keys: String,
    /// Matched keys in s-keys form.
    pub skeys: String,
    /// Matched letters, with pattern references flattened in.
    pub letters: String,
    /// Parsed flag set.
    pub flags: RuleFlags,
    /// Description for display alongside a match.
    pub description: String,
    /// Ids of the rules referenced by the declaration pattern, in pattern
    /// order. Kept for presentation; matching uses only `letters`.
    pub references: Vec<String>,
    /// Weighting level for accuracy comparisons.
    pub weight: i32,
}

impl LexerRule {
    /// Derive the comparison weight from the resolved letters and flags.
    pub(crate) fn derive_weight(letters: &str, flags: &RuleFlags) -> i32 {
        10 * letters.chars().count() as i32 - i32::from(flags.rare)
    }
}

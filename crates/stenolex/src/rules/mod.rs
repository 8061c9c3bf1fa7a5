//! # Steno Rule Database
//!
//! Rules are declared as a flat JSON mapping:
//!
//! ```json
//! { "rule_id": ["KEYS", "pattern", "flag|flag", "description"] }
//! ```
//!
//! with the flag and description fields optional, and full-line `#` / `//`
//! comments allowed around entries. `pattern` holds literal letters plus
//! `{other_rule_id}` references, which the loader flattens; the lexer only
//! ever sees the flattened letters.

mod flags;
mod parser;
mod rule;

pub use flags::{RuleFlag, RuleFlags};
pub use parser::{strip_line_comments, RawRulesMap, RuleDatabase};
pub use rule::LexerRule;

/// The built-in demonstration rule set, in declaration format.
pub const BUILTIN_RULES_JSON: &str = include_str!("../../assets/rules.json");

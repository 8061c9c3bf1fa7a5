//! # Lexer Search Engine
//!
//! Trial-and-error stack search. Partial states are expanded by consulting
//! the rule matchers; every state the matchers cannot extend is kept, and a
//! ranking pass picks the decomposition considered most likely to be
//! correct.

mod ranking;
mod search;
mod state;

pub use search::{LexerResult, StenoLexer};

pub(crate) use state::LexerState;

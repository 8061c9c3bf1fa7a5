#![warn(missing_docs, unused)]
//! # `stenolex` Steno Analysis Suite
//!
//! A stenographic analyzer. Given a steno outline paired with the English
//! text it writes, the lexer searches for the most plausible decomposition
//! of the outline into named rules: key fragments that concatenate back to
//! the outline, letter fragments that concatenate into the text.
//!
//! ## Client Summary
//!
//! ### Core Client Types
//! * [`KeyLayout`] - the steno key alphabet and the RTFCRE/s-keys
//!   conversions.
//! * [`RuleDatabase`] - the immutable rule collection, loaded from
//!   declarative JSON.
//! * [`StenoAnalyzer`] - the user-facing query interface; wraps the
//!   [`StenoLexer`] search engine with key conversion on both ends.
//!
//! ### Batch Indexing
//! * [`IndexBuilder`] - runs the analyzer over a whole translations
//!   dictionary and inverts the results into an examples index mapping each
//!   rule id to the translations that exercise it.
//! * [`TranslationSizeFilter`] - drops long translations before a batch.
//! * [`ParallelMapper`] - the fan-out wrapper (``rayon`` when the feature is
//!   on, serial otherwise).
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stenolex::{KeyLayout, RuleDatabase, SLResult, StenoAnalyzer};
//!
//! fn example() -> SLResult<()> {
//!     let layout = Arc::new(KeyLayout::english());
//!     let rules = RuleDatabase::parse(
//!         r#"{ "t": ["T", "t"], "e": ["E", "e"], "s": ["-S", "s"] }"#,
//!         &layout,
//!     )?;
//!     let analyzer = StenoAnalyzer::from_rules(layout, &rules);
//!
//!     let analysis = analyzer.query("TES", "tes", false);
//!     assert!(analysis.is_complete());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Crate Features
//!
//! * `ahash` *(default)* - faster hash maps throughout.
//! * `rayon` *(default)* - parallel batch index builds.

pub mod analyzer;
pub mod index;
pub mod io;
pub mod keys;
pub mod lexer;
pub mod matchers;
pub mod parallel;
pub mod rules;
pub mod support;

mod errors;
mod types;

#[doc(inline)]
pub use analyzer::{Analysis, AnalysisNode, Connection, StenoAnalyzer};
#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use index::{IndexBuilder, TranslationSizeFilter};
#[doc(inline)]
pub use keys::{KeyLayout, KeyLayoutConfig};
#[doc(inline)]
pub use lexer::{LexerResult, StenoLexer};
#[doc(inline)]
pub use parallel::ParallelMapper;
#[doc(inline)]
pub use rules::{LexerRule, RuleDatabase};
#[doc(inline)]
pub use types::{ExamplesIndex, TranslationsDict};

//! # Examples Index Generation
//!
//! A batch pass over a translations dictionary: filter out long entries,
//! analyze what remains (in parallel when available), and invert the
//! results into a rule id -> translations index.

mod builder;
mod filter;

pub use builder::IndexBuilder;
pub use filter::TranslationSizeFilter;

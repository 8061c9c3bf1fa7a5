//! # Steno Key Layouts
//!
//! Two string formats of steno keys are in play:
//!
//! * **s-keys** — one character per key. Right-bank keys are lowercased so
//!   they stay distinct from left-bank keys even when both banks use the same
//!   letter. Everything inside the lexer is s-keys: one key is always one
//!   character, with no ambiguity over board sides.
//! * **RTFCRE** — the interchange form used by steno dictionaries (and by
//!   Plover). All uppercase; a hyphen splits the left+center keys from the
//!   right bank, and is omitted whenever a center key makes the split
//!   unambiguous.
//!
//! Strings from outside sources (JSON files, user input) are assumed to be
//! RTFCRE; variables holding the internal format are named `skeys`.

mod layout;

pub use layout::{KeyLayout, KeyLayoutConfig};

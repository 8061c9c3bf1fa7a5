//! # Common Types

use std::collections::BTreeMap;

#[cfg(feature = "ahash")]
mod hash_types {
    /// Type Alias for hash maps in this crate.
    pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;

    /// Type Alias for hash sets in this crate.
    pub type CommonHashSet<V> = ahash::AHashSet<V>;
}
#[cfg(not(feature = "ahash"))]
mod hash_types {
    /// Type Alias for hash maps in this crate.
    pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;

    /// Type Alias for hash sets in this crate.
    pub type CommonHashSet<V> = std::collections::HashSet<V>;
}
pub use hash_types::*;

/// A flat steno translations dictionary: RTFCRE outline -> letters.
///
/// Ordered so batch runs and saved files are deterministic.
pub type TranslationsDict = BTreeMap<String, String>;

/// The inverted examples index: rule id -> { outline -> letters }.
///
/// Ordered at both levels so saved indexes diff cleanly.
pub type ExamplesIndex = BTreeMap<String, BTreeMap<String, String>>;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

/// Check if a type is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: S) {}

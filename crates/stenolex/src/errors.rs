//! # Error Types

/// Errors from stenolex operations.
///
/// Rule-database variants are fatal at startup and carry the offending rule
/// id. [`InvalidKey`](StenolexError::InvalidKey) is never fatal during
/// analysis: the analyzer catches it and reports the whole outline as
/// unmatched instead.
#[derive(Debug, thiserror::Error)]
pub enum StenolexError {
    /// A key string contains a character outside the configured alphabet.
    #[error("invalid key character {key:?} in stroke {stroke:?}")]
    InvalidKey {
        /// The character that is not a configured key or alias.
        key: char,
        /// The stroke it appeared in.
        stroke: String,
    },

    /// A rule declaration does not have 2-4 fields.
    #[error("rule {id:?} needs 2-4 fields, got {fields}")]
    MalformedRule {
        /// The offending rule id.
        id: String,
        /// How many fields the declaration actually had.
        fields: usize,
    },

    /// A rule pattern has an unterminated `{reference}`.
    #[error("rule {id:?} has an unterminated reference in pattern {pattern:?}")]
    BadPattern {
        /// The offending rule id.
        id: String,
        /// The pattern text as declared.
        pattern: String,
    },

    /// A rule's flag field holds an unknown flag name.
    #[error("rule {id:?} has unparsable flags {flags:?}")]
    BadFlags {
        /// The offending rule id.
        id: String,
        /// The flag field as declared.
        flags: String,
    },

    /// A rule pattern references an id that does not exist.
    #[error("rule {id:?} references unknown rule {reference:?}")]
    UnknownReference {
        /// The referring rule id.
        id: String,
        /// The id that could not be resolved.
        reference: String,
    },

    /// Rule pattern references form a cycle.
    #[error("rule {id:?} is part of a reference cycle")]
    CircularReference {
        /// A rule id on the cycle.
        id: String,
    },

    /// Two rule declarations share the same id.
    #[error("duplicate rule id {id:?}")]
    DuplicateRule {
        /// The id declared more than once.
        id: String,
    },

    /// The worker pool could not be brought up for a parallel batch.
    #[error("worker pool failure: {0}")]
    WorkerPool(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON syntax error in a resource file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for stenolex operations.
pub type SLResult<T> = std::result::Result<T, StenolexError>;

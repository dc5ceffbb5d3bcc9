//! Error types for varbind mapping

use thiserror::Error;

/// Errors raised while mapping varbinds into a record.
///
/// These are configuration errors — a mismatch between a field's
/// declared kind and its binding — and are fatal to the call; a
/// destination record should not be reused after one without being
/// reset. A varbind that simply matches no field is not an error (the
/// mapper reports `Ok(false)`).
#[derive(Error, Debug)]
pub enum MappingError {
    /// An exact binding matched a keyed table; no map key can be derived.
    #[error(
        "table field '{field}' matched an exact OID binding; a pattern with a capture group is required to derive the map key"
    )]
    ExactBindingOnTable { field: &'static str },

    /// A pattern matched a keyed table but captured nothing.
    #[error("pattern '{pattern}' on table field '{field}' matched but has no capture group for the map key")]
    MissingCaptureGroup {
        field: &'static str,
        pattern: &'static str,
    },

    /// A pattern binding failed to compile (strict mode only).
    #[error("invalid pattern binding on field '{field}': {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

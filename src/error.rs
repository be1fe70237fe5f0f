//! Errors returned by direct tracker mutations.

/// Error returned when a direct `try_add`, `update` or `delete` cannot apply.
///
/// The offending key is rendered with `Debug` so the error does not carry
/// the tracker's key type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// `try_add` was called for a key the tracker already holds.
    #[error("element with key '{key}' was already added")]
    DuplicateKey { key: String },
    /// `update` or `delete` was called for a key the tracker never saw.
    #[error("element with key '{key}' not found")]
    NotFound { key: String },
}

impl TrackerError {
    pub(crate) fn duplicate_key<K: std::fmt::Debug>(key: &K) -> TrackerError {
        return TrackerError::DuplicateKey { key: format!("{key:?}") };
    }

    pub(crate) fn not_found<K: std::fmt::Debug>(key: &K) -> TrackerError {
        return TrackerError::NotFound { key: format!("{key:?}") };
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

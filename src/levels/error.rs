//! Level lookup and fetch error types

use thiserror::Error;

/// Errors surfaced by the levels data layer.
///
/// Nothing is swallowed or retried here: every fault is the caller's to
/// handle, typically by showing a retry UI.
#[derive(Error, Debug)]
pub enum LevelsError {
    /// The requested level name is in neither catalog
    #[error("level '{name}' not found in the local or remote catalog")]
    NotFound { name: String },

    /// A lookup fell through to the remote catalog before any fetch succeeded
    #[error("remote catalog has not been fetched yet; fetch all levels with remote = true first")]
    RemoteUninitialized,

    /// The remote store reported an error; propagated verbatim, no retry
    #[error("failed to fetch levels from the remote store: {0:#}")]
    Fetch(anyhow::Error),

    /// A remote document is missing a required field or holds the wrong type.
    /// Aborts the whole fetch; no partial records are produced.
    #[error("malformed remote level document '{id}': {reason}")]
    MalformedDocument { id: String, reason: String },
}

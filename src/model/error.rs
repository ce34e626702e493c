//! Error taxonomy for the search and favorites engine.
//!
//! Errors are structured `thiserror` enums composing via `From` and `?`.
//! The taxonomy mirrors how each failure is recovered from:
//!
//! - [`SearchError`] - outcome of one search invocation; all three variants
//!   are recoverable by the user (re-prompt or retry) and map to distinct
//!   user-facing messages.
//! - [`LookupError`] - transport or decode failure from the remote lookup
//!   client. Surfaces through `SearchError::Transport` for searches and
//!   through [`DetailError`] for detail fetches.
//! - [`DetailError`] - detail fetch failure. Reported as a transient,
//!   dismissible notice and never allowed to corrupt session state.
//! - [`PersistenceError`] - favorites write failure. The in-memory set
//!   remains the session's source of truth; the stale persisted copy is an
//!   accepted inconsistency until the next successful save.
//! - [`AppError`] - binary-level wrapper for everything above plus startup
//!   concerns (config, logging).

use crate::model::MealId;
use std::path::PathBuf;
use thiserror::Error;

/// Why a search invocation produced no result set.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No ingredient, category, or area was given. Detected before any
    /// remote call is made.
    #[error("no search filter specified")]
    NoFilterSpecified,

    /// Every sub-lookup succeeded but the aggregate result set was empty.
    /// Reported rather than silently rendering an empty list.
    #[error("no recipes matched the filters")]
    NoResults,

    /// A remote lookup failed hard. The invocation is aborted fail-fast;
    /// no partial results are kept.
    #[error("recipe lookup failed: {0}")]
    Transport(#[from] LookupError),
}

impl SearchError {
    /// Human-readable message for display.
    ///
    /// The three variants are deliberately distinguishable so the user
    /// knows whether to fix their input, broaden it, or just retry.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::NoFilterSpecified => {
                "Please enter an ingredient or select a category or cuisine."
            }
            SearchError::NoResults => "No recipes found matching your filters.",
            SearchError::Transport(_) => "Something went wrong! Please try again.",
        }
    }
}

/// Transport or decode failure from the remote lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    Status {
        /// Numeric status code of the response.
        status: u16,
        /// API endpoint that was queried.
        endpoint: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response from {endpoint}: {reason}")]
    Decode {
        /// API endpoint that was queried.
        endpoint: String,
        /// Decoder error detail.
        reason: String,
    },
}

/// Why a detail fetch produced no detail subject.
///
/// Detail failures are transient notices. They never alter the session's
/// search state, and an open popup stays open.
#[derive(Debug, Error)]
pub enum DetailError {
    /// The service knows no meal with this id.
    #[error("no recipe found with id {0}")]
    NotFound(MealId),

    /// The lookup failed at the transport layer.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl DetailError {
    /// Human-readable notice for display.
    pub fn user_message(&self) -> &'static str {
        "Failed to load recipe details."
    }
}

/// Favorites write failure.
///
/// Load never produces this type: absent or undecodable persisted data is
/// treated as an empty favorites set, not an error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Could not create the directory that holds the favorites file.
    #[error("failed to create favorites directory {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Could not write the favorites file.
    #[error("failed to write favorites to {path:?}: {source}")]
    Write {
        /// Target file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Could not encode the favorites list as JSON.
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Top-level application error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("logging setup failed: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// A search invocation failed.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// A standalone lookup (outside a search) failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The favorites list could not be persisted.
    #[error("favorites persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

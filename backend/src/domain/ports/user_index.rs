//! Driven port for the external user index.
//!
//! The domain owns the document shape and the query window; the adapter owns
//! the engine's wire protocol. All engine failures surface through
//! [`UserIndexError`] and are terminal for the request that raised them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::UserDocument;

/// Logical name of the user index inside the engine.
pub const USER_INDEX: &str = "users";

/// Errors surfaced while talking to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIndexError {
    /// Network transport failed before receiving a response.
    #[error("engine transport failed: {message}")]
    Transport {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The engine call exceeded its deadline.
    #[error("engine timed out: {message}")]
    Timeout {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The engine responded but the payload could not be decoded.
    #[error("engine response decode failed: {message}")]
    Decode {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The engine reported the request as failed.
    #[error("engine rejected request: {message}")]
    Rejected {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl UserIndexError {
    /// Transport-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Deadline exceeded.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Undecodable engine payload.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Engine-reported failure.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// One search request against the user index.
///
/// Ephemeral per-request value; the fuzzy multi-field policy itself is part
/// of the engine wire format and lives with the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearchQuery {
    /// Free-text term matched across the indexed fields. May be empty; the
    /// engine's multi-match semantics decide what that returns.
    pub term: String,
    /// Offset of the first hit in the result window.
    pub from: u64,
    /// Maximum number of hits returned.
    pub size: u64,
}

/// Port for index management, document writes, and search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserIndex: Send + Sync {
    /// Probe whether the user index exists in the engine.
    async fn index_exists(&self) -> Result<bool, UserIndexError>;

    /// Create the user index with the engine's default settings.
    async fn create_index(&self) -> Result<(), UserIndexError>;

    /// Write one document into the user index.
    async fn index_user(&self, user: &UserDocument) -> Result<(), UserIndexError>;

    /// Run a fuzzy multi-field search and return hits in relevance order.
    ///
    /// Zero matching documents is a successful empty result, not an error.
    async fn search_users(
        &self,
        query: &UserSearchQuery,
    ) -> Result<Vec<UserDocument>, UserIndexError>;
}

//! Failure taxonomy for the data layer.

use thiserror::Error;

/// Errors surfaced by the data services and stores.
#[derive(Debug, Error)]
pub enum DataError {
    /// Transport failure or non-success HTTP status.
    #[error("{operation}: request failed: {message}")]
    Network {
        /// Operation that issued the request, e.g. `list_games`.
        operation: &'static str,
        /// Human-readable transport or status detail.
        message: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("{operation}: malformed response: {source}")]
    Decode {
        /// Operation whose response failed to parse.
        operation: &'static str,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The requested entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. `game`.
        entity: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// A create payload violated an invariant.
    #[error("invalid payload: {0}")]
    Validation(String),
}

impl DataError {
    /// Transport-level failure for the given operation.
    pub fn network(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            operation,
            message: message.into(),
        }
    }

    /// Missing-entity failure.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

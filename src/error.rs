//! Error types and handling for Rendezvous

use std::time::Duration;

/// Result type alias for Rendezvous operations
pub type Result<T> = std::result::Result<T, RendezvousError>;

/// Error types for the registry, queues and attach table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RendezvousError {
    /// A key is already bound to a resource of another type
    #[error("Type mismatch: key '{key}' is already used with {expected}, requested {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Head/tail access on an empty queue
    #[error("Empty queue: '{operation}' called on an empty queue")]
    EmptyQueue { operation: &'static str },

    /// Operation on a named queue handle that is not attached
    #[error("Not attached: '{operation}' called on a detached named queue")]
    NotAttached { operation: &'static str },

    /// Attach to a key that was never created
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// Attach on a handle that already holds an attachment
    #[error("Already attached: handle is attached to '{key}'")]
    AlreadyAttached { key: String },

    /// Invalid parameters or configuration
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// A polling wait ran past its deadline
    #[error("Timed out after {waited:?}")]
    Timeout { waited: Duration },
}

impl RendezvousError {
    /// Create a type mismatch error
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an empty queue error
    pub fn empty_queue(operation: &'static str) -> Self {
        Self::EmptyQueue { operation }
    }

    /// Create a not attached error
    pub fn not_attached(operation: &'static str) -> Self {
        Self::NotAttached { operation }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an already attached error
    pub fn already_attached(key: impl Into<String>) -> Self {
        Self::AlreadyAttached { key: key.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(waited: Duration) -> Self {
        Self::Timeout { waited }
    }

    /// Key involved in the failure, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { key, .. }
            | Self::KeyNotFound { key }
            | Self::AlreadyAttached { key } => Some(key),
            _ => None,
        }
    }
}

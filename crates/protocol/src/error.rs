//! Error types for the sitekeeper-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, including date parsing failures, invalid sort keys and
//! data-model invariant violations.

use thiserror::Error;

use crate::project::ProjectId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A date string could not be parsed.
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A sort key outside the supported set was requested.
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),

    /// A project violates one of the data-model invariants.
    #[error("invalid project {id}: {reason}")]
    InvalidProject {
        /// The offending project.
        id: ProjectId,
        /// What is wrong with it.
        reason: String,
    },

    /// No project with the given ID exists.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

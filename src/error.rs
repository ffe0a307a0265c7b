//! Error types for the highlight library
//!
//! This module provides centralized error handling using `thiserror` across
//! all components. The range algebra itself is total and defines no errors;
//! only serialization and storage can fail.

use thiserror::Error;

/// Serialization-related errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum SerializationError {
    /// Serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl SerializationError {
    /// Create a serialization failed error
    pub fn serialization_failed(reason: impl Into<String>) -> Self {
        Self::SerializationFailed(reason.into())
    }

    /// Create a deserialization failed error
    pub fn deserialization_failed(reason: impl Into<String>) -> Self {
        Self::DeserializationFailed(reason.into())
    }
}

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Store-related errors
#[derive(Debug, Error, uniffi::Error)]
pub enum StoreError {
    /// No state stored under the given view identifier
    #[error("No highlight state stored for view: {0}")]
    NotFound(String),

    /// A state cannot be saved without a view identifier
    #[error("View identifier must not be empty")]
    EmptyIdentifier,

    /// I/O error reported by the backing provider
    #[error("I/O error: {0}")]
    IoError(String),

    /// Stored bytes could not be decoded (or state encoded)
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// General store error
    #[error("Store error: {0}")]
    Other(String),
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(view_id: impl Into<String>) -> Self {
        Self::NotFound(view_id.into())
    }

    /// Create an I/O error
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }

    /// Create a generic store error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Main unified error type that can represent any highlight error
#[derive(Debug, Error, uniffi::Error)]
pub enum HighlightError {
    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

impl HighlightError {
    /// Create a generic error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other(reason.into())
    }
}

/// Result type for highlight operations
pub type HighlightResult<T> = Result<T, HighlightError>;

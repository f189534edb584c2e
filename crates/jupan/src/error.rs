// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types for the calculator core

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for calculator operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input was rejected before the operation ran (bad number, bad operand
    /// for the operation's domain)
    #[error("{0}")]
    Validation(String),

    /// The operation itself could not produce a result (overflow, out of
    /// range intermediate)
    #[error("{0}")]
    Operation(String),

    /// I/O error from the filesystem
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an operation error
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// Check if this error is an input/domain rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from persistence (filesystem or JSON)
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_))
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Operation(_) => "operation",
            Self::Io(_) => "io",
            Self::Json(_) => "serialization",
        }
    }
}

//! Error types for svcinspect operations.
//!
//! This module defines [`InspectError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for
//! convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-item probe failures (missing directory, failing or hung
//!   script) are classified into the result document, never raised here
//! - `InspectError` covers everything that aborts the run: config,
//!   registry query, and result store failures
//! - Use `anyhow::Error` (via `InspectError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for svcinspect operations.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Service registry view query failed.
    #[error("Service view query failed: {message}")]
    Query { message: String },

    /// Result document lookup or write failed.
    #[error("Result store error for '{id}': {message}")]
    Store { id: String, message: String },

    /// The system hostname could not be turned into a document key.
    #[error("Could not determine hostname: {message}")]
    Hostname { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for svcinspect operations.
pub type Result<T> = std::result::Result<T, InspectError>;

//! Error types for Screenflow.
//!
//! All errors in Screenflow are represented by the `ScreenflowError` enum,
//! which provides specific variants for different error categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Screenflow operations.
///
/// Each variant represents a specific category of error that can occur
/// while decoding, encoding or validating a screen document.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum ScreenflowError {
    /// Screen document decode errors.
    #[error("{0}")]
    Screen(String),

    /// Component node decode errors.
    #[error("{0}")]
    Node(String),

    /// Data conversion errors (JSON encode/decode).
    #[error("{0}")]
    Convert(String),

    /// Strict-mode validation failures.
    #[error("{0}")]
    Validation(String),
}

impl From<ScreenflowError> for String {
    fn from(val: ScreenflowError) -> Self {
        val.to_string()
    }
}

impl From<serde_json::Error> for ScreenflowError {
    fn from(error: serde_json::Error) -> Self {
        ScreenflowError::Convert(error.to_string())
    }
}

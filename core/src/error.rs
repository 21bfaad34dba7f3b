//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Route conversion itself never fails; these errors cover the edges where a
//! route listing is read, parsed, or a generated document is serialized.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON (de)serialization failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML (de)serialization failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

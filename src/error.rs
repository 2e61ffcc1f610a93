//! Error types and handling for mdstitch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdstitch operations
#[derive(Error, Diagnostic, Debug)]
pub enum MdstitchError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(mdstitch::fs::not_found),
        help("Check that the path is correct and the file exists")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(mdstitch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(mdstitch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mdstitch::fs::io_error))]
    IoError { message: String },

    // Include expansion errors
    #[error("Circular include detected: {path} (chain: {chain})")]
    #[diagnostic(
        code(mdstitch::include::circular),
        help("Remove the include directive that re-enters a file already being expanded")
    )]
    CircularInclude { path: String, chain: String },

    // Responses API errors
    #[error("OPENAI_API_KEY is missing or empty")]
    #[diagnostic(
        code(mdstitch::api::key_missing),
        help("Set the OPENAI_API_KEY environment variable or pass --api-key")
    )]
    ApiKeyMissing,

    #[error("API request failed: {reason}")]
    #[diagnostic(code(mdstitch::api::request_failed))]
    ApiRequestFailed { reason: String },

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(mdstitch::api::response_error))]
    ApiError { status: u16, message: String },

    #[error("No output_text found in API response")]
    #[diagnostic(
        code(mdstitch::api::empty_output),
        help("The model returned no message content; try again or adjust the instructions")
    )]
    ApiEmptyOutput,
}

impl MdstitchError {
    /// Process exit code for this error, matching the convention used by
    /// the peer documentation tools: 2 content/usage, 3 missing key,
    /// 4 I/O failure, 5 API failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MdstitchError::CircularInclude { .. } => 2,
            MdstitchError::ApiKeyMissing => 3,
            MdstitchError::FileNotFound { .. }
            | MdstitchError::FileReadFailed { .. }
            | MdstitchError::FileWriteFailed { .. }
            | MdstitchError::IoError { .. } => 4,
            MdstitchError::ApiRequestFailed { .. }
            | MdstitchError::ApiError { .. }
            | MdstitchError::ApiEmptyOutput => 5,
        }
    }
}

impl From<std::io::Error> for MdstitchError {
    fn from(err: std::io::Error) -> Self {
        MdstitchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for MdstitchError {
    fn from(err: reqwest::Error) -> Self {
        MdstitchError::ApiRequestFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MdstitchError>;

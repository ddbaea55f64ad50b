//! Error types for cmd-adapter
//!
//! Library code returns [`AdapterError`]; the CLI wraps it in `anyhow` and
//! reports the stable [`ErrorCode`] in its structured error log.

use std::path::PathBuf;

use serde_json::json;
use thiserror::Error;

use crate::domain::value_objects::Format;

/// Result type alias for cmd-adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Stable machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing required command input
    Arg,
    /// Schema validation failed
    IrInvalid,
    /// File extension not recognized
    UnsupportedFormat,
    /// Text could not be decoded
    Decode,
    /// Artifact could not be encoded
    Encode,
    /// A schema document could not be compiled
    SchemaInvalid,
    /// Transaction record not found
    TxnNotFound,
    /// Filesystem failure
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Arg => "ARG",
            ErrorCode::IrInvalid => "IR_INVALID",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::Decode => "DECODE",
            ErrorCode::Encode => "ENCODE",
            ErrorCode::SchemaInvalid => "SCHEMA_INVALID",
            ErrorCode::TxnNotFound => "TXN_NOT_FOUND",
            ErrorCode::Io => "IO",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for cmd-adapter operations
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A required command input was not provided
    #[error("{name} is required")]
    MissingArgument { name: String },

    /// IR (or artifact) failed its schema; carries every violation
    #[error("IR schema invalid for {file}: {}", .errors.join("; "))]
    IrInvalid { file: PathBuf, errors: Vec<String> },

    /// Artifact file name that would land outside the output tree
    #[error("artifact name '{name}' must stay inside the output directory")]
    UnsafeName { name: String },

    /// Transaction id that is not a single plain path segment
    #[error("invalid transaction id '{id}'")]
    InvalidTransactionId { id: String },

    /// Extension not handled by any codec
    #[error("unsupported format '{extension}' for {file}")]
    UnsupportedFormat { file: PathBuf, extension: String },

    /// Text could not be decoded with the selected codec
    #[error("invalid {format} in {file}: {message}")]
    Decode {
        file: PathBuf,
        format: Format,
        message: String,
    },

    /// IR could not be encoded into a platform artifact
    #[error("failed to encode {platform} artifact '{name}': {message}")]
    Encode {
        platform: String,
        name: String,
        message: String,
    },

    /// Schema document is not valid JSON Schema
    #[error("invalid schema {path}: {message}")]
    SchemaInvalid { path: PathBuf, message: String },

    /// No record stored for this transaction id
    #[error("transaction '{id}' not found at {path}")]
    TransactionNotFound { id: String, path: PathBuf },

    /// Directory expected but missing
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// I/O error bound to a path
    #[error("{path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AdapterError::FileIo {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AdapterError::MissingArgument { .. } => ErrorCode::Arg,
            AdapterError::IrInvalid { .. } | AdapterError::UnsafeName { .. } => {
                ErrorCode::IrInvalid
            }
            AdapterError::InvalidTransactionId { .. } => ErrorCode::Arg,
            AdapterError::UnsupportedFormat { .. } => ErrorCode::UnsupportedFormat,
            AdapterError::Decode { .. } => ErrorCode::Decode,
            AdapterError::Encode { .. } => ErrorCode::Encode,
            AdapterError::SchemaInvalid { .. } => ErrorCode::SchemaInvalid,
            AdapterError::TransactionNotFound { .. } => ErrorCode::TxnNotFound,
            AdapterError::DirectoryNotFound { .. }
            | AdapterError::FileIo { .. }
            | AdapterError::Io(_) => ErrorCode::Io,
        }
    }

    /// Structured context attached to the error log line
    pub fn context(&self) -> serde_json::Value {
        match self {
            AdapterError::MissingArgument { name } => json!({ "argument": name }),
            AdapterError::IrInvalid { file, errors } => json!({
                "file": file.display().to_string(),
                "errors": errors,
            }),
            AdapterError::UnsafeName { name } => json!({ "name": name }),
            AdapterError::InvalidTransactionId { id } => json!({ "txn": id }),
            AdapterError::UnsupportedFormat { file, extension } => json!({
                "file": file.display().to_string(),
                "extension": extension,
            }),
            AdapterError::Decode { file, format, .. } => json!({
                "file": file.display().to_string(),
                "format": format.to_string(),
            }),
            AdapterError::Encode { platform, name, .. } => json!({
                "platform": platform,
                "name": name,
            }),
            AdapterError::SchemaInvalid { path, .. } => json!({ "schema": path.display().to_string() }),
            AdapterError::TransactionNotFound { id, path } => json!({
                "txn": id,
                "path": path.display().to_string(),
            }),
            AdapterError::DirectoryNotFound { path } | AdapterError::FileIo { path, .. } => {
                json!({ "path": path.display().to_string() })
            }
            AdapterError::Io(_) => json!({}),
        }
    }
}

//! Error types and exit codes for routegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown or out-of-range node)
//! - 3: Data error (invalid edge, malformed dataset file)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the routegraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid edge or dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Why an edge was rejected at graph construction
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EdgeDefect {
    #[error("endpoint {node} is outside 0..{node_count}")]
    EndpointOutOfRange { node: usize, node_count: usize },

    #[error("self-loop on node {node}")]
    SelfLoop { node: usize },

    #[error("negative weight {0}")]
    NegativeWeight(f64),

    #[error("non-finite weight {0}")]
    NonFiniteWeight(f64),
}

/// Errors that can occur during routegraph operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("node index {index} out of range (graph has {node_count} nodes)")]
    OutOfRange { index: usize, node_count: usize },

    #[error("unknown node: {label}")]
    UnknownNode { label: String },

    // Data errors (exit code 3)
    #[error("invalid edge #{position} ({from} -- {to}): {defect}")]
    InvalidEdge {
        position: usize,
        from: usize,
        to: usize,
        defect: EdgeDefect,
    },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a node index that does not exist in the graph
    pub fn out_of_range(index: usize, node_count: usize) -> Self {
        RouteError::OutOfRange { index, node_count }
    }

    /// Create an error for a malformed dataset file
    pub fn invalid_dataset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidDataset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::OutOfRange { .. }
            | RouteError::UnknownNode { .. } => ExitCode::Usage,

            RouteError::InvalidEdge { .. } | RouteError::InvalidDataset { .. } => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Toml(_) | RouteError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::OutOfRange { .. } => "out_of_range",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::InvalidEdge { .. } => "invalid_edge",
            RouteError::InvalidDataset { .. } => "invalid_dataset",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteError>;

//! Error types for pathgraph
//!
//! Graph operations themselves never fail: an unknown endpoint or a missing
//! path is reported through a `false` or empty result. Errors cover the
//! surface around the graph:
//! - invalid or unsupported values (graph kinds, strategies, log levels)
//! - configuration loading (I/O, TOML)
//! - process-wide setup such as installing the tracing subscriber

mod macros;

use thiserror::Error;

/// Errors that can occur outside of the graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl GraphError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a name outside the supported set
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether the caller supplied a bad value, as opposed to an environment failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidValue { .. } | GraphError::Unsupported { .. }
        )
    }
}

/// Result type alias for pathgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

//! Configuration error types.

use thiserror::Error;

/// A single rule a configuration value broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    /// Delay or interval that is negative, NaN or infinite
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration { field: &'static str, value: f32 },

    /// Fade duration or speed that must be strictly positive
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    /// Capacity that must hold at least one entry
    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },

    /// Scene name left blank
    #[error("{field} must not be empty")]
    EmptySceneName { field: &'static str },
}

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violation found, not only the first
    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

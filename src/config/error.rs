//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single reason a configuration cannot be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("mount_selector must not be empty")]
    EmptyMountSelector,

    #[error("prompt_field_id must not be empty")]
    EmptyPromptFieldId,

    #[error("prompt_field_id '{id}' must not contain whitespace")]
    WhitespaceInPromptFieldId { id: String },

    #[error("timing.min_elapsed must be at least 1")]
    ZeroMinElapsed,

    #[error("timing.max_elapsed ({max}) must be a single digit")]
    MaxElapsedTooLarge { max: u32 },

    #[error("timing.min_elapsed ({min}) exceeds timing.max_elapsed ({max})")]
    InvertedElapsedRange { min: u32, max: u32 },
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but failed validation
    #[error("invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

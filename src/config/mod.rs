//! Terminal configuration.
//!
//! Every field has a default matching the page the terminal was written for,
//! so an empty TOML document is a valid configuration. Validation uses
//! `Validation` to report ALL problems at once rather than the first one.
//!
//! # Example
//!
//! ```rust
//! use birdie_terminal::config::TerminalConfig;
//!
//! let config = TerminalConfig::from_toml_str(
//!     r#"
//!     timer_delay_ms = 250
//!
//!     [timing]
//!     max_elapsed = 9
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.prompt_field_id, "terminal-prompt-field");
//! assert_eq!(config.timing.max_elapsed, 9);
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest elapsed value; the transcript prints it as a single digit.
pub const MAX_ELAPSED: u32 = 9;

/// Bounds for the pseudo-random "seconds elapsed" seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub min_elapsed: u32,
    pub max_elapsed: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_elapsed: 1,
            max_elapsed: 6,
        }
    }
}

impl TimingConfig {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min_elapsed..=self.max_elapsed
    }
}

/// Settings shared by the update loop and the runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Selector of the element the terminal mounts into.
    pub mount_selector: String,
    /// Element id of the prompt input, target of focus and scroll effects.
    pub prompt_field_id: String,
    /// Delay before the timing timer armed by `gleam test` fires.
    pub timer_delay_ms: u64,
    pub timing: TimingConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            mount_selector: "#terminal".to_string(),
            prompt_field_id: "terminal-prompt-field".to_string(),
            timer_delay_ms: 0,
            timing: TimingConfig::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validated()
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn timer_delay(&self) -> Duration {
        Duration::from_millis(self.timer_delay_ms)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            check(
                !self.mount_selector.trim().is_empty(),
                ConfigViolation::EmptyMountSelector,
            ),
            check(
                !self.prompt_field_id.is_empty(),
                ConfigViolation::EmptyPromptFieldId,
            ),
            check(
                !self.prompt_field_id.chars().any(char::is_whitespace),
                ConfigViolation::WhitespaceInPromptFieldId {
                    id: self.prompt_field_id.clone(),
                },
            ),
            check(self.timing.min_elapsed >= 1, ConfigViolation::ZeroMinElapsed),
            check(
                self.timing.max_elapsed <= MAX_ELAPSED,
                ConfigViolation::MaxElapsedTooLarge {
                    max: self.timing.max_elapsed,
                },
            ),
            check(
                self.timing.min_elapsed <= self.timing.max_elapsed,
                ConfigViolation::InvertedElapsedRange {
                    min: self.timing.min_elapsed,
                    max: self.timing.max_elapsed,
                },
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Consume the configuration, returning it only if it is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn check(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

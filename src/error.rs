//! Configuration errors.
//!
//! Policy violations are never errors; they are reported as [`crate::RuleKind`]
//! values inside a [`crate::PolicyEvaluation`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1, got {0}")]
    InvalidMinimumLength(usize),
    #[error("Invalid value for {var}: {value:?} (expected a positive integer)")]
    InvalidEnvValue { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, PolicyError>;

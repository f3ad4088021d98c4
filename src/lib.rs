//! Password policy validation library
//!
//! This library checks a candidate password against a composite policy
//! (minimum length, character classes, low-entropy patterns) and reports
//! every rule the password violates.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_MIN_LENGTH`: Minimum password length read by
//!   [`PolicyConfig::from_env`] (default: 8)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password_policy, PolicyConfig, RuleKind};
//! use secrecy::SecretString;
//!
//! let config = PolicyConfig::new(10).expect("valid minimum length");
//! let password = SecretString::new("Invalid123@username".to_string().into());
//!
//! let evaluation = evaluate_password_policy(&password, &config);
//!
//! assert!(!evaluation.passed());
//! assert_eq!(evaluation.violations, vec![RuleKind::SequentialOrRepeatingPattern]);
//! for reason in evaluation.reasons() {
//!     println!("{reason}");
//! }
//! ```

// Internal modules
mod config;
mod error;
mod evaluator;
mod sections;
mod types;

// Public API
pub use config::{PolicyConfig, DEFAULT_MIN_LENGTH, MIN_LENGTH_ENV, SPECIAL_CHARACTERS};
pub use error::{PolicyError, Result};
pub use evaluator::{evaluate_password_policy, evaluate_password_policy_str, meets_password_policy};
pub use types::{PolicyEvaluation, RuleKind};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_policy_tx, EVALUATION_DEBOUNCE};

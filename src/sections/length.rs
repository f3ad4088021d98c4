//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::config::PolicyConfig;
use crate::types::RuleKind;

/// Checks if the password meets the configured minimum length.
///
/// Length is measured in Unicode scalar values, not bytes.
///
/// # Returns
/// - `Some(RuleKind::TooShort)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString, config: &PolicyConfig) -> SectionResult {
    if password.expose_secret().chars().count() < config.minimum_length() {
        return Some(RuleKind::TooShort);
    }
    None
}

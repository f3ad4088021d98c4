//! Character variety sections - one check per required character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::config::{PolicyConfig, SPECIAL_CHARACTERS};
use crate::types::RuleKind;

fn require_class(
    password: &SecretString,
    in_class: impl Fn(char) -> bool,
    missing: RuleKind,
) -> SectionResult {
    if password.expose_secret().chars().any(in_class) {
        return None;
    }
    Some(missing)
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Requires at least one character in `[A-Z]`.
pub fn uppercase_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    require_class(password, |c| c.is_ascii_uppercase(), RuleKind::MissingUppercase)
}

/// Requires at least one character in `[a-z]`.
pub fn lowercase_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    require_class(password, |c| c.is_ascii_lowercase(), RuleKind::MissingLowercase)
}

/// Requires at least one character in `[0-9]`.
pub fn digit_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    require_class(password, |c| c.is_ascii_digit(), RuleKind::MissingDigit)
}

/// Requires at least one character from [`SPECIAL_CHARACTERS`].
pub fn special_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    require_class(password, is_special, RuleKind::MissingSpecialChar)
}

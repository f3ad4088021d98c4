//! Policy configuration.

use std::env::VarError;

use crate::error::{PolicyError, Result};

/// Environment variable overriding the minimum password length.
pub const MIN_LENGTH_ENV: &str = "PWD_POLICY_MIN_LENGTH";

/// Minimum length used when nothing else is configured.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Symbols accepted by the special character check.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?|\\";

/// Immutable policy parameters.
///
/// A `PolicyConfig` is validated once at construction and can be reused
/// across any number of evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyConfig {
    minimum_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PolicyConfig {
    /// Creates a configuration with the given minimum length (in characters).
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidMinimumLength`] if `minimum_length` is 0.
    pub fn new(minimum_length: usize) -> Result<Self> {
        if minimum_length == 0 {
            return Err(PolicyError::InvalidMinimumLength(minimum_length));
        }
        Ok(Self { minimum_length })
    }

    /// Builds the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_POLICY_MIN_LENGTH`
    /// 2. Default minimum length of 8
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let raw = match std::env::var(MIN_LENGTH_ENV) {
            Ok(raw) if raw.trim().is_empty() => return Ok(Self::default()),
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return Ok(Self::default()),
            Err(VarError::NotUnicode(os)) => {
                return Err(invalid_env_value(os.to_string_lossy().into_owned()));
            }
        };

        let minimum_length = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| invalid_env_value(raw.clone()))?;

        Self::new(minimum_length)
    }

    /// Builder-style alias for [`PolicyConfig::new`].
    ///
    /// The minimum length is the only configurable field, so nothing is
    /// carried over from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidMinimumLength`] if `minimum_length` is 0.
    pub fn with_minimum_length(self, minimum_length: usize) -> Result<Self> {
        Self::new(minimum_length)
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }
}

fn invalid_env_value(value: String) -> PolicyError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Invalid policy configuration: {} is not a positive integer", MIN_LENGTH_ENV);
    PolicyError::InvalidEnvValue {
        var: MIN_LENGTH_ENV,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only used from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only used from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_default_minimum_length() {
        assert_eq!(PolicyConfig::default().minimum_length(), 8);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            PolicyConfig::new(0),
            Err(PolicyError::InvalidMinimumLength(0))
        );
    }

    #[test]
    fn test_new_accepts_one() {
        let config = PolicyConfig::new(1).expect("1 is a valid minimum");
        assert_eq!(config.minimum_length(), 1);
    }

    #[test]
    fn test_with_minimum_length() {
        let config = PolicyConfig::default().with_minimum_length(10).unwrap();
        assert_eq!(config.minimum_length(), 10);
        assert_eq!(config, PolicyConfig::new(10).unwrap());
        assert_eq!(
            PolicyConfig::default().with_minimum_length(0),
            Err(PolicyError::InvalidMinimumLength(0))
        );
    }

    #[test]
    fn test_special_characters_are_ascii_punctuation() {
        assert_eq!(SPECIAL_CHARACTERS.chars().count(), 30);
        assert!(SPECIAL_CHARACTERS.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_default() {
        remove_env(MIN_LENGTH_ENV);
        assert_eq!(PolicyConfig::from_env(), Ok(PolicyConfig::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_uses_default() {
        set_env(MIN_LENGTH_ENV, "  ");
        assert_eq!(PolicyConfig::from_env(), Ok(PolicyConfig::default()));
        remove_env(MIN_LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_custom_value() {
        set_env(MIN_LENGTH_ENV, "12");
        let config = PolicyConfig::from_env().unwrap();
        assert_eq!(config.minimum_length(), 12);
        remove_env(MIN_LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_not_a_number() {
        set_env(MIN_LENGTH_ENV, "twelve");
        match PolicyConfig::from_env() {
            Err(PolicyError::InvalidEnvValue { var, value }) => {
                assert_eq!(var, MIN_LENGTH_ENV);
                assert_eq!(value, "twelve");
            }
            other => panic!("Expected InvalidEnvValue, got {:?}", other),
        }
        remove_env(MIN_LENGTH_ENV);
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_from_env_non_utf8_value() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let value = OsString::from_vec(vec![0x31, 0xff, 0x32]);
        // SAFETY: #[serial] test
        unsafe { std::env::set_var(MIN_LENGTH_ENV, &value); }

        match PolicyConfig::from_env() {
            Err(PolicyError::InvalidEnvValue { var, value }) => {
                assert_eq!(var, MIN_LENGTH_ENV);
                assert_eq!(value, "1\u{FFFD}2");
            }
            other => panic!("Expected InvalidEnvValue, got {:?}", other),
        }
        remove_env(MIN_LENGTH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_zero() {
        set_env(MIN_LENGTH_ENV, "0");
        assert_eq!(
            PolicyConfig::from_env(),
            Err(PolicyError::InvalidMinimumLength(0))
        );
        remove_env(MIN_LENGTH_ENV);
    }
}

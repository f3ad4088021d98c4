//! Evaluation result types.

use std::fmt;

use crate::config::PolicyConfig;

/// A single policy rule that a password can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecialChar,
    SequentialOrRepeatingPattern,
}

impl RuleKind {
    /// All rule kinds, in evaluation order.
    pub const ALL: [RuleKind; 6] = [
        RuleKind::TooShort,
        RuleKind::MissingUppercase,
        RuleKind::MissingLowercase,
        RuleKind::MissingDigit,
        RuleKind::MissingSpecialChar,
        RuleKind::SequentialOrRepeatingPattern,
    ];

    /// Stable identifier for mapping violations to host message catalogues.
    pub fn code(self) -> &'static str {
        match self {
            RuleKind::TooShort => "too_short",
            RuleKind::MissingUppercase => "missing_uppercase",
            RuleKind::MissingLowercase => "missing_lowercase",
            RuleKind::MissingDigit => "missing_digit",
            RuleKind::MissingSpecialChar => "missing_special_char",
            RuleKind::SequentialOrRepeatingPattern => "sequential_or_repeating_pattern",
        }
    }

    /// Human readable explanation of the violation.
    pub fn reason(self, config: &PolicyConfig) -> String {
        match self {
            RuleKind::TooShort => format!(
                "Password must be at least {} characters",
                config.minimum_length()
            ),
            RuleKind::MissingUppercase => {
                "Password must contain an uppercase letter".to_string()
            }
            RuleKind::MissingLowercase => {
                "Password must contain a lowercase letter".to_string()
            }
            RuleKind::MissingDigit => "Password must contain a number".to_string(),
            RuleKind::MissingSpecialChar => {
                "Password must contain a special character".to_string()
            }
            RuleKind::SequentialOrRepeatingPattern => {
                "Password contains sequential or repetitive patterns".to_string()
            }
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of evaluating one password against a [`PolicyConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEvaluation {
    /// Failed rules, in evaluation order. Empty iff the password passed.
    pub violations: Vec<RuleKind>,
    config: PolicyConfig,
}

impl PolicyEvaluation {
    pub(crate) fn new(violations: Vec<RuleKind>, config: PolicyConfig) -> Self {
        Self { violations, config }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violates(&self, kind: RuleKind) -> bool {
        self.violations.contains(&kind)
    }

    /// The configuration the password was evaluated against.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// One explanation per violation, in evaluation order.
    pub fn reasons(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|kind| kind.reason(&self.config))
            .collect()
    }
}

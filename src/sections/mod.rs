//! Password policy sections
//!
//! Each section checks one rule of the policy.

mod length;
mod pattern;
mod variety;

use secrecy::SecretString;

use crate::config::PolicyConfig;
use crate::types::RuleKind;

pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(kind)` - Section failed with the given rule
/// - `None` - Section passed
pub type SectionResult = Option<RuleKind>;

pub type Section = fn(&SecretString, &PolicyConfig) -> SectionResult;

/// Every section, in evaluation order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
    ("pattern", pattern_analysis_section),
];

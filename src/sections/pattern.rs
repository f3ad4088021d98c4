//! Pattern analysis section - detects digit runs and repeated letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::config::PolicyConfig;
use crate::types::RuleKind;

/// Length of a digit run or letter repetition that counts as a pattern.
const PATTERN_RUN: usize = 3;

/// Analyzes password for low-entropy runs.
///
/// Flags either of:
/// - three ASCII digits in a row, whatever their values ("123", "907", "000")
/// - the same ASCII letter three or more times in a row, case-sensitive
///
/// # Returns
/// - `Some(RuleKind::SequentialOrRepeatingPattern)` if a run is found
/// - `None` otherwise
pub fn pattern_analysis_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    let mut digit_run = 0;
    let mut letter_run = 0;
    let mut prev: Option<char> = None;

    for c in password.expose_secret().chars() {
        digit_run = if c.is_ascii_digit() { digit_run + 1 } else { 0 };

        letter_run = match prev {
            _ if !c.is_ascii_alphabetic() => 0,
            Some(p) if p == c => letter_run + 1,
            _ => 1,
        };

        if digit_run >= PATTERN_RUN || letter_run >= PATTERN_RUN {
            return Some(RuleKind::SequentialOrRepeatingPattern);
        }
        prev = Some(c);
    }

    None
}

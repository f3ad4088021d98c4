//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "tracing")]
use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PolicyConfig;
use crate::sections::SECTIONS;
use crate::types::PolicyEvaluation;

/// Delay before [`evaluate_password_policy_tx`] evaluates, so keystrokes
/// arriving in quick succession can cancel stale requests.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates a password against every policy rule.
///
/// All sections run, so the result lists every violated rule in
/// evaluation order rather than stopping at the first failure.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `config` - Policy parameters
///
/// # Returns
/// A `PolicyEvaluation` listing the violated rules.
pub fn evaluate_password_policy(password: &SecretString, config: &PolicyConfig) -> PolicyEvaluation {
    let mut violations = Vec::new();

    // Orchestrator: execute sections in sequence
    for &(_section_name, section_fn) in SECTIONS.iter() {
        if let Some(kind) = section_fn(password, config) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Password policy section {} failed: {}", _section_name, kind);
            violations.push(kind);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password policy evaluated: {} characters, {} violations",
        password.expose_secret().chars().count(),
        violations.len()
    );

    PolicyEvaluation::new(violations, *config)
}

/// Returns whether the password satisfies the policy.
///
/// Stops at the first failing section. Always agrees with
/// `evaluate_password_policy(password, config).passed()`.
pub fn meets_password_policy(password: &SecretString, config: &PolicyConfig) -> bool {
    SECTIONS
        .iter()
        .all(|(_, section_fn)| section_fn(password, config).is_none())
}

/// Convenience wrapper for callers holding a plain `&str`.
pub fn evaluate_password_policy_str(password: &str, config: &PolicyConfig) -> PolicyEvaluation {
    evaluate_password_policy(&SecretString::new(password.into()), config)
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled before the
/// wait ends, nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_policy_tx(
    password: &SecretString,
    config: &PolicyConfig,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("Password policy evaluation scheduled");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password policy evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_policy(password, config);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password policy evaluation: {}", _e);
    }
}

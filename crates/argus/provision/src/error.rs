//! Provisioning error types

use argus_controller::ControllerError;
use thiserror::Error;

/// Errors from provisioning operations that refuse or cannot proceed.
///
/// Per-resource creation failures are not errors; they are folded into
/// [`argus_types::CreationOutcome`] values so a batch always runs to
/// completion.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Named health rule does not exist in the application.
    #[error("Health rule not found")]
    RuleNotFound {
        /// The name that failed to resolve
        name: String,
    },

    /// A severity block has more than one condition; threshold ownership
    /// is ambiguous and the whole update is refused.
    #[error("Health rule '{name}' has multiple conditions. Threshold update skipped.")]
    AmbiguousConditions {
        /// The rule whose update was refused
        name: String,
    },

    /// A threshold argument did not parse as a decimal number.
    #[error("invalid threshold value '{value}'")]
    InvalidThreshold {
        /// The offending input
        value: String,
    },

    /// Non-synthetic onboarding without a tier name.
    #[error("tier name is required for non-synthetic onboarding")]
    TierRequired,

    /// Controller call failed.
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Result type for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

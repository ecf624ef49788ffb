//! Estimator contract errors.

/// The single estimator-level failure: a gender literal outside the closed
/// set the log form offers. Everything else is a caller precondition.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("invalid driver gender {literal:?}: expected \"Male\" or \"Female\"")]
    InvalidGender { literal: String },
}

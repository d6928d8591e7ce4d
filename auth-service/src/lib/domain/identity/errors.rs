use thiserror::Error;

/// Failures reported by the employee directory port.
///
/// Transport failure is distinct from "no such record": an unreachable
/// directory must never read as bad credentials.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Directory has no such resource")]
    NotFound,

    #[error("Directory unreachable: {0}")]
    Unavailable(String),

    #[error("Directory request failed: {0}")]
    Unexpected(String),
}

/// Failures of credential verification.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Invalid credentials")]
    BadCredentials,

    #[error("No account with username: {0}")]
    UserNotFound(String),

    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

/// Failures of employee registration.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Employee or Shift not found")]
    NotFound,

    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

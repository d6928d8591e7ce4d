use thiserror::Error;

/// Error for EmployeeId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Employee ID must be greater than zero, got {0}")]
    NotPositive(i32),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Error for short text fields (names, department, role label)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Phone number must be exactly 10 digits")]
    NotTenDigits,
}

/// Error for JoinedDate validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JoinedDateError {
    #[error("Joined date must be in the past")]
    NotInPast,
}

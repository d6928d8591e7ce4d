use std::fmt;

/// Role label carried by manager accounts.
pub const ROLE_MANAGER: &str = "MANAGER";

/// Role label carried by regular employee accounts.
pub const ROLE_EMPLOYEE: &str = "EMPLOYEE";

/// Identity resolved from a verified token or a successful credential check.
///
/// Immutable once resolved; requests never re-resolve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Unique username
    pub subject: String,

    /// Single role label, e.g. "EMPLOYEE" or "MANAGER"
    pub role: String,
}

impl Identity {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role == ROLE_MANAGER
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.subject, self.role)
    }
}

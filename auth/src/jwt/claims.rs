use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by a session token.
///
/// A token asserts exactly one identity and one role. Whatever decodes with a
/// valid signature and an unexpired `exp` is trusted as-is; no directory
/// lookup happens on decode, so a role change at the directory does not
/// affect tokens issued before it until they expire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Single role label, e.g. "EMPLOYEE" or "MANAGER"
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject/role pair, stamped at `issued_at` and
    /// expiring `lifetime` later.
    pub fn new(
        subject: impl Into<String>,
        role: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            sub: subject.into(),
            role: role.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

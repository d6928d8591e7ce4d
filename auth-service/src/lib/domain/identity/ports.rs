use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::employee::models::EmployeeRecord;
use crate::domain::identity::errors::DirectoryError;

/// Outbound port to the employee directory service.
///
/// The directory is the authoritative store of username, password hash, and
/// role. Implementations make at most one attempt per call; retry policy
/// belongs to callers, not here.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectoryPort: Send + Sync + 'static {
    /// Look up an employee record by username.
    ///
    /// # Returns
    /// `Ok(None)` when the directory has no record for the username.
    ///
    /// # Errors
    /// * `Unavailable` - transport failure (timeout, connection refused)
    /// * `Unexpected` - any other directory failure
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeRecord>, DirectoryError>;

    /// Register a new employee record. The record carries the password hash,
    /// never the plaintext.
    ///
    /// # Errors
    /// * `NotFound` - directory rejected the record as referencing a missing resource
    /// * `Unavailable` - transport failure
    /// * `Unexpected` - any other directory failure
    async fn register(&self, record: &EmployeeRecord) -> Result<EmployeeRecord, DirectoryError>;
}

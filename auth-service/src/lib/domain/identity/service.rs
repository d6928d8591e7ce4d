use std::sync::Arc;

use crate::domain::employee::models::EmployeeRecord;
use crate::domain::employee::models::NewEmployee;
use crate::domain::identity::errors::CredentialError;
use crate::domain::identity::errors::DirectoryError;
use crate::domain::identity::errors::RegistrationError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::DirectoryPort;

/// Credential verification and employee registration against the directory.
///
/// The directory holds the authoritative username/hash/role records; this
/// service reads them for login and writes them for registration. Plaintext
/// passwords live only inside a single call and are never logged.
pub struct CredentialService<D>
where
    D: DirectoryPort,
{
    directory: Arc<D>,
    password_hasher: auth::PasswordHasher,
}

impl<D> CredentialService<D>
where
    D: DirectoryPort,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Verify a username/password pair and resolve the asserted identity.
    ///
    /// # Errors
    /// * `UserNotFound` - directory has no record for the username
    /// * `BadCredentials` - password does not match the stored hash
    /// * `DirectoryUnavailable` - directory transport failure
    pub async fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Identity, CredentialError> {
        tracing::debug!(%username, "Loading directory record");

        let record = self
            .directory
            .find_by_username(username)
            .await
            .map_err(|e| match e {
                DirectoryError::NotFound => CredentialError::UserNotFound(username.to_string()),
                DirectoryError::Unavailable(msg) => CredentialError::DirectoryUnavailable(msg),
                DirectoryError::Unexpected(msg) => CredentialError::Unexpected(msg),
            })?
            .ok_or_else(|| {
                tracing::warn!(%username, "No directory record for username");
                CredentialError::UserNotFound(username.to_string())
            })?;

        let matches = self.password_hasher.verify(password, &record.password)?;
        if !matches {
            tracing::warn!(%username, "Password mismatch");
            return Err(CredentialError::BadCredentials);
        }

        Ok(Identity::new(record.username, record.role))
    }

    /// Hash the registration password and forward the record to the
    /// directory.
    ///
    /// # Errors
    /// * `NotFound` - directory reports a referenced resource missing
    /// * `DirectoryUnavailable` - directory transport failure
    pub async fn register(&self, employee: NewEmployee) -> Result<EmployeeRecord, RegistrationError> {
        tracing::info!(username = %employee.username, "Registering employee");

        let password_hash = self.password_hasher.hash(employee.password.as_str())?;
        let record = employee.into_record(password_hash);

        self.directory.register(&record).await.map_err(|e| match e {
            DirectoryError::NotFound => RegistrationError::NotFound,
            DirectoryError::Unavailable(msg) => RegistrationError::DirectoryUnavailable(msg),
            DirectoryError::Unexpected(msg) => RegistrationError::Unexpected(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::employee::models::EmailAddress;
    use crate::domain::employee::models::EmployeeId;
    use crate::domain::employee::models::JoinedDate;
    use crate::domain::employee::models::Label;
    use crate::domain::employee::models::Password;
    use crate::domain::employee::models::PhoneNumber;
    use crate::domain::employee::models::Username;
    use crate::domain::identity::models::ROLE_MANAGER;
    use crate::domain::identity::ports::MockDirectoryPort;

    fn stored_record(username: &str, password: &str, role: &str) -> EmployeeRecord {
        let hash = auth::PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        EmployeeRecord {
            employee_id: 1,
            manager_id: 1,
            username: username.to_string(),
            password: hash,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "0123456789".to_string(),
            department: "Engineering".to_string(),
            role: role.to_string(),
            shift_id: 1,
            joined_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        }
    }

    fn new_employee(username: &str) -> NewEmployee {
        NewEmployee {
            employee_id: EmployeeId::new(7).unwrap(),
            manager_id: EmployeeId::new(1).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            password: Password::new("Sup3rsecret".to_string()).unwrap(),
            first_name: Label::new("first name", "Bob".to_string()).unwrap(),
            last_name: Label::new("last name", "Jones".to_string()).unwrap(),
            email: EmailAddress::new("bob@example.com".to_string()).unwrap(),
            phone_number: PhoneNumber::new("0123456789".to_string()).unwrap(),
            department: Label::new("department", "Sales".to_string()).unwrap(),
            role: Label::new("role", "EMPLOYEE".to_string()).unwrap(),
            shift_id: 1,
            joined_date: JoinedDate::new(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_verify_success() {
        let mut directory = MockDirectoryPort::new();
        let record = stored_record("alice", "Correct_horse1", ROLE_MANAGER);
        directory
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .returning(move |_| Ok(Some(record.clone())));

        let service = CredentialService::new(Arc::new(directory));
        let identity = service
            .verify("alice", "Correct_horse1")
            .await
            .expect("Verification failed");

        assert_eq!(identity.subject, "alice");
        assert_eq!(identity.role, ROLE_MANAGER);
    }

    #[tokio::test]
    async fn test_verify_wrong_password() {
        let mut directory = MockDirectoryPort::new();
        let record = stored_record("alice", "Correct_horse1", ROLE_MANAGER);
        directory
            .expect_find_by_username()
            .returning(move |_| Ok(Some(record.clone())));

        let service = CredentialService::new(Arc::new(directory));
        let result = service.verify("alice", "wrongpw").await;

        assert!(matches!(result, Err(CredentialError::BadCredentials)));
    }

    #[tokio::test]
    async fn test_verify_unknown_user() {
        let mut directory = MockDirectoryPort::new();
        directory.expect_find_by_username().returning(|_| Ok(None));

        let service = CredentialService::new(Arc::new(directory));
        let result = service.verify("ghost", "x").await;

        assert!(matches!(result, Err(CredentialError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_verify_directory_unreachable() {
        let mut directory = MockDirectoryPort::new();
        directory
            .expect_find_by_username()
            .returning(|_| Err(DirectoryError::Unavailable("connection refused".to_string())));

        let service = CredentialService::new(Arc::new(directory));
        let result = service.verify("alice", "Correct_horse1").await;

        // An outage must not read as bad credentials.
        assert!(matches!(
            result,
            Err(CredentialError::DirectoryUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut directory = MockDirectoryPort::new();
        directory
            .expect_register()
            .withf(|record: &EmployeeRecord| {
                record.username == "bob" && record.password.starts_with("$argon2")
            })
            .returning(|record| Ok(record.clone()));

        let service = CredentialService::new(Arc::new(directory));
        let saved = service
            .register(new_employee("bob"))
            .await
            .expect("Registration failed");

        assert_eq!(saved.username, "bob");
        // The directory never sees the plaintext.
        assert_ne!(saved.password, "Sup3rsecret");
    }

    #[tokio::test]
    async fn test_register_directory_not_found() {
        let mut directory = MockDirectoryPort::new();
        directory
            .expect_register()
            .returning(|_| Err(DirectoryError::NotFound));

        let service = CredentialService::new(Arc::new(directory));
        let result = service.register(new_employee("bob")).await;

        assert!(matches!(result, Err(RegistrationError::NotFound)));
    }

    #[tokio::test]
    async fn test_register_directory_unreachable() {
        let mut directory = MockDirectoryPort::new();
        directory
            .expect_register()
            .returning(|_| Err(DirectoryError::Unavailable("timed out".to_string())));

        let service = CredentialService::new(Arc::new(directory));
        let result = service.register(new_employee("bob")).await;

        assert!(matches!(
            result,
            Err(RegistrationError::DirectoryUnavailable(_))
        ));
    }
}

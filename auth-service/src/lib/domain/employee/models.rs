use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::employee::errors::EmailError;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::JoinedDateError;
use crate::domain::employee::errors::LabelError;
use crate::domain::employee::errors::PasswordPolicyError;
use crate::domain::employee::errors::PhoneNumberError;
use crate::domain::employee::errors::UsernameError;

/// Employee record as the directory service stores and returns it.
///
/// The `password` field holds the salted hash, never a plaintext password.
/// Field names follow the directory's JSON convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub employee_id: i32,
    pub manager_id: i32,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub shift_id: i32,
    pub joined_date: NaiveDate,
}

/// Positive employee or manager identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(i32);

impl EmployeeId {
    pub fn new(id: i32) -> Result<Self, EmployeeIdError> {
        if id >= 1 {
            Ok(Self(id))
        } else {
            Err(EmployeeIdError::NotPositive(id))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Username value type, 2 to 50 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 50;

    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext registration password, validated against the password policy.
///
/// Exists only between request parsing and hashing. The Debug impl redacts
/// the value so it cannot reach a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Short human-readable text field, 2 to 50 characters.
///
/// Covers first name, last name, department, and role label, which share
/// the same length constraint. The field name is kept for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 50;

    pub fn new(field: &'static str, value: String) -> Result<Self, LabelError> {
        let length = value.chars().count();
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            Err(LabelError::OutOfRange {
                field,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: String) -> Result<Self, PhoneNumberError> {
        if number.len() == 10 && number.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(number))
        } else {
            Err(PhoneNumberError::NotTenDigits)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Joining date, strictly before today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinedDate(NaiveDate);

impl JoinedDate {
    pub fn new(date: NaiveDate) -> Result<Self, JoinedDateError> {
        if date < Utc::now().date_naive() {
            Ok(Self(date))
        } else {
            Err(JoinedDateError::NotInPast)
        }
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

/// Command to register a new employee, all fields validated.
///
/// `shift_id` is carried through to the directory unvalidated; shift
/// assignment is the directory's concern.
#[derive(Debug)]
pub struct NewEmployee {
    pub employee_id: EmployeeId,
    pub manager_id: EmployeeId,
    pub username: Username,
    pub password: Password,
    pub first_name: Label,
    pub last_name: Label,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    pub department: Label,
    pub role: Label,
    pub shift_id: i32,
    pub joined_date: JoinedDate,
}

impl NewEmployee {
    /// Build the wire record for the directory, substituting the password
    /// hash for the plaintext.
    pub fn into_record(self, password_hash: String) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: self.employee_id.value(),
            manager_id: self.manager_id.value(),
            username: self.username.as_str().to_string(),
            password: password_hash,
            first_name: self.first_name.as_str().to_string(),
            last_name: self.last_name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            phone_number: self.phone_number.as_str().to_string(),
            department: self.department.as_str().to_string(),
            role: self.role.as_str().to_string(),
            shift_id: self.shift_id,
            joined_date: self.joined_date.value(),
        }
    }
}

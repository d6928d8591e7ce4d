use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::errors::EmailError;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::JoinedDateError;
use crate::domain::employee::errors::LabelError;
use crate::domain::employee::errors::PasswordPolicyError;
use crate::domain::employee::errors::PhoneNumberError;
use crate::domain::employee::errors::UsernameError;
use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::EmployeeRecord;
use crate::domain::employee::models::JoinedDate;
use crate::domain::employee::models::Label;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::Password;
use crate::domain::employee::models::PhoneNumber;
use crate::domain::employee::models::Username;
use crate::inbound::http::middleware::AuthenticatedIdentity;
use crate::inbound::http::router::AppState;

/// Register a new employee in the directory.
///
/// The route policy leaves `/api/auth/**` public, so the manager requirement
/// is enforced here against the identity the pipeline attached.
pub async fn register(
    State(state): State<AppState>,
    caller: Option<Extension<AuthenticatedIdentity>>,
    Json(body): Json<RegisterEmployeeRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let caller = caller
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?
        .0
         .0;

    if !caller.is_manager() {
        tracing::warn!(caller = %caller, "Registration refused for non-manager");
        return Err(ApiError::Forbidden("Manager role required".to_string()));
    }

    tracing::info!(username = %body.username, "Registering new employee");

    let employee = body.try_into_command()?;

    state
        .credentials
        .register(employee)
        .await
        .map_err(ApiError::from)
        .map(|ref record| ApiSuccess::new(StatusCode::CREATED, record.into()))
}

/// HTTP request body for employee registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    employee_id: i32,
    manager_id: i32,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    department: String,
    role: String,
    #[serde(default)]
    shift_id: i32,
    joined_date: NaiveDate,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid employee or manager ID: {0}")]
    EmployeeId(#[from] EmployeeIdError),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("{0}")]
    Label(#[from] LabelError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone number: {0}")]
    PhoneNumber(#[from] PhoneNumberError),

    #[error("Invalid joined date: {0}")]
    JoinedDate(#[from] JoinedDateError),
}

impl RegisterEmployeeRequest {
    fn try_into_command(self) -> Result<NewEmployee, ParseRegisterRequestError> {
        Ok(NewEmployee {
            employee_id: EmployeeId::new(self.employee_id)?,
            manager_id: EmployeeId::new(self.manager_id)?,
            username: Username::new(self.username)?,
            password: Password::new(self.password)?,
            first_name: Label::new("first name", self.first_name)?,
            last_name: Label::new("last name", self.last_name)?,
            email: EmailAddress::new(self.email)?,
            phone_number: PhoneNumber::new(self.phone_number)?,
            department: Label::new("department", self.department)?,
            role: Label::new("role", self.role)?,
            shift_id: self.shift_id,
            joined_date: JoinedDate::new(self.joined_date)?,
        })
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Registered employee as returned to the caller. The stored password hash
/// stays inside the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseData {
    pub employee_id: i32,
    pub manager_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub role: String,
    pub shift_id: i32,
    pub joined_date: NaiveDate,
}

impl From<&EmployeeRecord> for RegisterResponseData {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            employee_id: record.employee_id,
            manager_id: record.manager_id,
            username: record.username.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            department: record.department.clone(),
            role: record.role.clone(),
            shift_id: record.shift_id,
            joined_date: record.joined_date,
        }
    }
}

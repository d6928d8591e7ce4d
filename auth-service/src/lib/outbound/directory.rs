use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::DirectoryConfig;
use crate::domain::employee::models::EmployeeRecord;
use crate::domain::identity::errors::DirectoryError;
use crate::domain::identity::ports::DirectoryPort;

/// HTTP client for the employee directory service.
///
/// Every call is bounded by the configured timeout; a timeout or refused
/// connection surfaces as `Unavailable`, never as a missing record.
pub struct HttpDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn transport_error(e: reqwest::Error) -> DirectoryError {
        if e.is_timeout() || e.is_connect() {
            DirectoryError::Unavailable(e.to_string())
        } else {
            DirectoryError::Unexpected(e.to_string())
        }
    }
}

#[async_trait]
impl DirectoryPort for HttpDirectoryClient {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeRecord>, DirectoryError> {
        let url = format!(
            "{}/api/employee/employee-username/{}",
            self.base_url, username
        );
        tracing::debug!(%username, "Directory lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_server_error() => Err(DirectoryError::Unavailable(format!(
                "directory returned {}",
                status
            ))),
            status if !status.is_success() => Err(DirectoryError::Unexpected(format!(
                "directory returned {}",
                status
            ))),
            _ => response
                .json::<EmployeeRecord>()
                .await
                .map(Some)
                .map_err(Self::transport_error),
        }
    }

    async fn register(&self, record: &EmployeeRecord) -> Result<EmployeeRecord, DirectoryError> {
        let url = format!("{}/api/employee/register-employee", self.base_url);
        tracing::debug!(username = %record.username, "Directory registration");

        let response = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(Self::transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound),
            status if status.is_server_error() => Err(DirectoryError::Unavailable(format!(
                "directory returned {}",
                status
            ))),
            status if !status.is_success() => Err(DirectoryError::Unexpected(format!(
                "directory returned {}",
                status
            ))),
            _ => response
                .json::<EmployeeRecord>()
                .await
                .map_err(Self::transport_error),
        }
    }
}

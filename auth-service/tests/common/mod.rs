use std::sync::Arc;

use auth::JwtCodec;
use auth_service::config::DirectoryConfig;
use auth_service::domain::employee::models::EmployeeRecord;
use auth_service::domain::identity::service::CredentialService;
use auth_service::domain::policy::engine::RoutePolicy;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::directory::HttpDirectoryClient;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use chrono::Duration;
use chrono::NaiveDate;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

pub const MANAGER_PASSWORD: &str = "Manager_pw1";
pub const EMPLOYEE_PASSWORD: &str = "Employee_pw1";

/// Test application that spawns the service and an in-process stub of the
/// employee directory
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_codec: JwtCodec,
}

impl TestApp {
    /// Spawn the service against a directory stub seeded with one manager
    /// ("alice") and one employee ("bob").
    pub async fn spawn() -> Self {
        let directory_url = spawn_directory(vec![
            seed_record(1, "alice", MANAGER_PASSWORD, "MANAGER"),
            seed_record(2, "bob", EMPLOYEE_PASSWORD, "EMPLOYEE"),
        ])
        .await;

        Self::spawn_with_directory_url(&directory_url).await
    }

    /// Spawn the service against an arbitrary directory address. Point it at
    /// a closed port to exercise directory-outage behavior.
    pub async fn spawn_with_directory_url(directory_url: &str) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory_config = DirectoryConfig {
            base_url: directory_url.to_string(),
            timeout_seconds: 2,
        };
        let directory = Arc::new(
            HttpDirectoryClient::new(&directory_config)
                .expect("Failed to create directory client"),
        );
        let credentials = Arc::new(CredentialService::new(directory));
        let jwt_codec = Arc::new(JwtCodec::new(TEST_SECRET, Duration::hours(10)));
        let policy = Arc::new(RoutePolicy::workforce());

        let router = create_router(credentials, jwt_codec, policy);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_codec: JwtCodec::new(TEST_SECRET, Duration::hours(10)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Log in through the API and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }

    /// Mint a token directly, bypassing the login endpoint.
    pub fn token_for(&self, subject: &str, role: &str) -> String {
        self.jwt_codec
            .issue(subject, role)
            .expect("Failed to issue token")
    }

    /// Mint a token whose expiry is already in the past.
    pub fn expired_token_for(&self, subject: &str, role: &str) -> String {
        JwtCodec::new(TEST_SECRET, Duration::hours(-1))
            .issue(subject, role)
            .expect("Failed to issue token")
    }
}

/// A directory record with a freshly computed Argon2 hash.
pub fn seed_record(employee_id: i32, username: &str, password: &str, role: &str) -> EmployeeRecord {
    let hash = auth::PasswordHasher::new()
        .hash(password)
        .expect("Failed to hash password");

    EmployeeRecord {
        employee_id,
        manager_id: 1,
        username: username.to_string(),
        password: hash,
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        email: format!("{}@example.com", username),
        phone_number: "0123456789".to_string(),
        department: "Engineering".to_string(),
        role: role.to_string(),
        shift_id: 1,
        joined_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
    }
}

/// Spawn an in-process stand-in for the employee directory service.
///
/// Registration echoes the posted record back, but answers 404 when the
/// referenced manager is not among the seeded employees, mirroring the real
/// directory's "Employee or Shift not found" behavior.
pub async fn spawn_directory(records: Vec<EmployeeRecord>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let state = Arc::new(records);
    let router = Router::new()
        .route(
            "/api/employee/employee-username/:username",
            get(find_employee),
        )
        .route("/api/employee/register-employee", post(register_employee))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Directory stub error");
    });

    format!("http://127.0.0.1:{}", port)
}

async fn find_employee(
    State(records): State<Arc<Vec<EmployeeRecord>>>,
    Path(username): Path<String>,
) -> Response {
    match records.iter().find(|r| r.username == username) {
        Some(record) => Json(record.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn register_employee(
    State(records): State<Arc<Vec<EmployeeRecord>>>,
    Json(record): Json<EmployeeRecord>,
) -> Response {
    if !records.iter().any(|r| r.employee_id == record.manager_id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(record).into_response()
}

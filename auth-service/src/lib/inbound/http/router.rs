use std::sync::Arc;
use std::time::Duration;

use auth::JwtCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::Uri;
use axum::middleware;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::ApiError;
use super::middleware::authorize;
use crate::domain::identity::service::CredentialService;
use crate::domain::policy::engine::RoutePolicy;
use crate::outbound::directory::HttpDirectoryClient;

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialService<HttpDirectoryClient>>,
    pub jwt_codec: Arc<JwtCodec>,
    pub policy: Arc<RoutePolicy>,
}

pub fn create_router(
    credentials: Arc<CredentialService<HttpDirectoryClient>>,
    jwt_codec: Arc<JwtCodec>,
    policy: Arc<RoutePolicy>,
) -> Router {
    let state = AppState {
        credentials,
        jwt_codec,
        policy,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // The authorization middleware wraps every route and the fallback, so
    // the policy table sees paths this service does not itself serve.
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authorize))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

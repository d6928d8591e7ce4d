use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::identity::models::Identity;
use crate::domain::policy::models::Decision;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved for this request.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(pub Identity);

/// Per-request authentication and authorization.
///
/// Resolves at most one identity per request: a bearer token that fails to
/// decode is treated the same as no token at all, and the route policy
/// decides what that means for the requested path. Re-entry is idempotent;
/// an identity already attached to the request is reused instead of
/// re-decoding the token.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let identity = match req.extensions().get::<AuthenticatedIdentity>() {
        Some(resolved) => Some(resolved.0.clone()),
        None => bearer_token(&req).and_then(|token| match state.jwt_codec.decode(token) {
            Ok(claims) => Some(Identity::new(claims.sub, claims.role)),
            Err(e) => {
                // Invalid just means unauthenticated here; the policy
                // decides whether that rejects the request.
                tracing::warn!("Token rejected: {}", e);
                None
            }
        }),
    };

    match state.policy.decide(identity.as_ref(), req.uri().path()) {
        Decision::Permit => {
            if let Some(identity) = identity {
                req.extensions_mut().insert(AuthenticatedIdentity(identity));
            }
            Ok(next.run(req).await)
        }
        Decision::RequireAuth => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Authentication required"
            })),
        )
            .into_response()),
        Decision::Deny => Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "Insufficient role"
            })),
        )
            .into_response()),
    }
}

/// Pull the token out of a `Bearer` authorization header.
///
/// A missing header, non-UTF8 value, or other scheme all read as "no token
/// supplied" rather than an error.
fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

//! Bearer-token authentication.
//!
//! Tokens are opaque strings provisioned on user records; the middleware
//! resolves one to a `Principal {id, role}` before any handler runs.
//! Comparison is constant-time to mitigate timing attacks.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::models::{Principal, Role};
use crate::AppState;

/// Resolve the request's bearer token to a principal, or reject.
///
/// The resolved principal is attached as a request extension for handlers
/// and for the admin layer below.
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string());

    let Some(token) = token else {
        return AppError::Unauthorized("Missing or invalid token".to_string()).into_response();
    };

    let users = match state.repo.list_users().await {
        Ok(users) => users,
        Err(e) => return e.into_response(),
    };

    let principal = users
        .iter()
        .find(|user| constant_time_compare(&token, &user.token))
        .map(|user| Principal {
            id: user.id.clone(),
            role: user.role,
        });

    match principal {
        Some(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        None => AppError::Unauthorized("Missing or invalid token".to_string()).into_response(),
    }
}

/// Reject authenticated requests whose principal is not an admin.
///
/// Must sit inside a `require_user` layer; a missing principal extension
/// is treated as unauthenticated.
pub async fn require_admin(request: Request, next: Next) -> Response {
    match request.extensions().get::<Principal>() {
        Some(principal) if principal.role == Role::Admin => next.run(request).await,
        Some(_) => AppError::Forbidden("Admin access required".to_string()).into_response(),
        None => AppError::Unauthorized("Missing or invalid token".to_string()).into_response(),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("test-token-123", "test-token-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("test-token-123", "test-token-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-token"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }
}

//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the caller into extensions
//! - `RequireAuth` - Extractor that requires any authenticated caller
//! - `RequireAdmin` - Extractor that requires an authenticated admin
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, so it does not know
//! whether tokens are JWTs or fixtures from a test.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                  Handler → RequireAuth / RequireAdmin read from extensions
//! ```
//!
//! A request without an `Authorization` header passes through anonymously;
//! public routes simply never ask for a caller. A header that is present but
//! invalid is rejected with 401 before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates `Authorization: Bearer <token>` when present.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .map(|h| h.to_str().ok().and_then(|h| h.strip_prefix("Bearer ")));

    match header {
        None => next.run(request).await,
        Some(None) => AuthRejection::Invalid(AuthError::InvalidToken).into_response(),
        Some(Some(token)) => match validator.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => AuthRejection::Invalid(e).into_response(),
        },
    }
}

/// Extractor that requires authentication.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Extractor that requires an authenticated admin.
///
/// Anonymous callers get 401, authenticated non-admins get 403.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user = parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or(AuthRejection::Unauthenticated)?;

            user.require_admin().map_err(|_| {
                tracing::debug!(user_id = %user.id, "Admin route refused");
                AuthRejection::NotAdmin
            })?;
            Ok(RequireAdmin(user))
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No token was provided.
    Unauthenticated,
    /// A token was provided but did not resolve to a caller.
    Invalid(AuthError),
    /// The caller is authenticated but is not an admin.
    NotAdmin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required",
            ),
            AuthRejection::Invalid(err) if !err.requires_reauthentication() => {
                tracing::error!(error = %err, "Could not resolve caller");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error",
                )
            }
            AuthRejection::Invalid(AuthError::TokenExpired) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Token expired")
            }
            AuthRejection::Invalid(_) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Invalid token")
            }
            AuthRejection::NotAdmin => (StatusCode::FORBIDDEN, "FORBIDDEN", "Permission denied"),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

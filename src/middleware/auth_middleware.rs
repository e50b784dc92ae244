use crate::config::AppState;
use crate::entities::user;
use crate::models::auth_model::{AuthUser, CurrentUser};
use crate::utils::api_response::ResponseBuilder;
use crate::utils::jwt_utils::JwtUtils;
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::errors::ErrorKind;
use sea_orm::EntityTrait;

/// Resolve the request identity. Requests without an Authorization header
/// pass through as anonymous; a presented token must be valid or the request
/// is rejected here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> std::result::Result<Response, StatusCode> {
    // 1. No header at all: anonymous request
    let auth_header = match req.headers().get(header::AUTHORIZATION) {
        Some(header) => header,
        None => {
            req.extensions_mut().insert(AuthUser(None));
            return Ok(next.run(req).await);
        }
    };

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => {
            return Ok(ResponseBuilder::error::<()>(
                StatusCode::UNAUTHORIZED,
                "AUTH_INVALID_FORMAT",
                "Invalid Authorization header format",
            )
            .into_response());
        }
    };

    if !auth_str.starts_with("Bearer ") {
        return Ok(ResponseBuilder::error::<()>(
            StatusCode::UNAUTHORIZED,
            "AUTH_INVALID_SCHEME",
            "Invalid token format. Missing 'Bearer ' prefix",
        )
        .into_response());
    }

    let token = &auth_str[7..];

    // 2. Validate JWT
    let token_data = match JwtUtils::validate_jwt(&state.config, token) {
        Ok(data) => data,
        Err(e) => {
            let (code, message) = match e.kind() {
                ErrorKind::ExpiredSignature => ("TOKEN_EXPIRED", "Token has expired"),
                ErrorKind::InvalidToken => ("TOKEN_INVALID", "Token is invalid"),
                ErrorKind::InvalidSignature => ("TOKEN_BAD_SIGNATURE", "Invalid token signature"),
                _ => ("AUTH_FAILED", "Authentication failed"),
            };

            return Ok(
                ResponseBuilder::error::<()>(StatusCode::UNAUTHORIZED, code, message)
                    .into_response(),
            );
        }
    };

    // 3. The token subject must still exist
    let found = match user::Entity::find_by_id(token_data.claims.sub)
        .one(&state.db)
        .await
    {
        Ok(found) => found,
        Err(e) => {
            tracing::error!("Failed to load token subject: {}", e);
            return Ok(ResponseBuilder::error::<()>(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Failed to resolve request identity",
            )
            .into_response());
        }
    };

    let Some(account) = found else {
        return Ok(ResponseBuilder::error::<()>(
            StatusCode::UNAUTHORIZED,
            "USER_NOT_FOUND",
            "Token subject no longer exists",
        )
        .into_response());
    };

    req.extensions_mut().insert(AuthUser(Some(CurrentUser {
        id: account.id,
        username: account.username,
        email: account.email,
        is_admin: account.is_admin,
    })));

    Ok(next.run(req).await)
}

/// Extractor for handlers that require a signed-in user. Anonymous requests
/// are rejected with 401 before the handler body runs.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthUser>() {
            Some(AuthUser(Some(current))) => Ok(current.clone()),
            _ => Err(ResponseBuilder::error::<()>(
                StatusCode::UNAUTHORIZED,
                "AUTH_MISSING",
                "Authentication credentials were not provided",
            )
            .into_response()),
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Username must be 1 to 150 characters"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "First name must be 1 to 150 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Last name must be 1 to 150 characters"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(min = 6, max = 150, message = "Password must be 6 to 150 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_expires_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub iat: usize,
}

/// Identity resolved by the auth middleware for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// Request extension carrying the identity when a valid token was presented.
/// Anonymous requests get `AuthUser(None)`.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Option<CurrentUser>);

use crate::config::AppState;
use crate::models::auth_model::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::user_model::UserResponse;
use crate::repositories::user_repository::{NewUser, UserRepository};
use crate::utils::jwt_utils::JwtUtils;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::http::StatusCode;
use sea_orm::SqlErr;

pub struct AuthService;

impl AuthService {
    pub async fn register(
        state: &AppState,
        payload: RegisterRequest,
    ) -> Result<UserResponse, (StatusCode, &'static str, String)> {
        // 1. Check duplicates, reporting which field collides
        let duplicates =
            UserRepository::find_duplicates(&state.db, &payload.username, &payload.email)
                .await
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DB_ERR",
                        "Database error".to_string(),
                    )
                })?;

        for existing in &duplicates {
            if existing.email == payload.email {
                return Err((
                    StatusCode::CONFLICT,
                    "EMAIL_TAKEN",
                    "An account with this email already exists".to_string(),
                ));
            }
            if existing.username == payload.username {
                return Err((
                    StatusCode::CONFLICT,
                    "USERNAME_TAKEN",
                    "This username is already taken".to_string(),
                ));
            }
        }

        // 2. Hash password
        let password_hash = Self::hash_password(&payload.password)?;

        // 3. Save account
        let created = UserRepository::create(
            &state.db,
            NewUser {
                email: payload.email,
                username: payload.username,
                first_name: payload.first_name,
                last_name: payload.last_name,
                password_hash,
                is_admin: false,
            },
        )
        .await
        .map_err(|e| match e.sql_err() {
            // Lost a race with a concurrent registration
            Some(SqlErr::UniqueConstraintViolation(_)) => (
                StatusCode::CONFLICT,
                "ACCOUNT_EXISTS",
                "An account with this email or username already exists".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to create account: {}", e),
            ),
        })?;

        Ok(UserResponse {
            id: created.id,
            email: created.email,
            username: created.username,
            first_name: created.first_name,
            last_name: created.last_name,
            is_subscribed: false,
        })
    }

    pub async fn login(
        state: &AppState,
        payload: LoginRequest,
    ) -> Result<LoginResponse, (StatusCode, &'static str, String)> {
        let account = UserRepository::find_by_email(&state.db, &payload.email)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        // Same answer for unknown email and wrong password
        let Some(account) = account else {
            return Err(Self::invalid_credentials());
        };

        if !Self::verify_password(&payload.password, &account.password_hash) {
            return Err(Self::invalid_credentials());
        }

        let (token, token_expires_at) =
            JwtUtils::generate_jwt(&state.config, account.id).map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TOKEN_ERR",
                    format!("Failed to issue token: {}", e),
                )
            })?;

        Ok(LoginResponse {
            token,
            token_expires_at,
        })
    }

    // Also used by the admin seeder
    pub fn hash_password(password: &str) -> Result<String, (StatusCode, &'static str, String)> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "HASH_ERR",
                    format!("Failed to hash password: {}", e),
                )
            })?;

        Ok(hash.to_string())
    }

    fn verify_password(password: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    fn invalid_credentials() -> (StatusCode, &'static str, String) {
        (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Email or password is incorrect".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = AuthService::hash_password("correct horse").unwrap();
        assert!(AuthService::verify_password("correct horse", &hash));
        assert!(!AuthService::verify_password("wrong horse", &hash));
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        assert!(!AuthService::verify_password("anything", "not-a-phc-string"));
    }
}

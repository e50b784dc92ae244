use crate::config::AppState;
use crate::models::auth_model::{LoginRequest, RegisterRequest};
use crate::services::auth_service::AuthService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;
use axum::{extract::State, response::IntoResponse};

pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> impl IntoResponse {
    match AuthService::register(&state, payload).await {
        Ok(res) => {
            ResponseBuilder::created("USER_REGISTERED", "Account created", res).into_response()
        }
        Err((status, code, msg)) => {
            ResponseBuilder::error::<()>(status, code, &msg).into_response()
        }
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> impl IntoResponse {
    match AuthService::login(&state, payload).await {
        Ok(res) => {
            ResponseBuilder::success("LOGIN_SUCCESS", "Login successful", res).into_response()
        }
        Err((status, code, msg)) => {
            ResponseBuilder::error::<()>(status, code, &msg).into_response()
        }
    }
}

pub mod auth_handler;
pub mod ingredient_handler;
pub mod recipe_handler;
pub mod tag_handler;
pub mod user_handler;

use crate::utils::api_response::ResponseBuilder;
use axum::response::IntoResponse;
use chrono::Utc;

pub async fn health_check_handler() -> impl IntoResponse {
    ResponseBuilder::success(
        "HEALTH_CHECK_SUCCESS",
        "Server is healthy",
        serde_json::json!({
            "status": "up",
            "server_time": Utc::now().to_rfc3339(),
        }),
    )
}

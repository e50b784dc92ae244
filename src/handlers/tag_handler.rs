use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::config::AppState;
use crate::services::tag_service::TagService;
use crate::utils::api_response::ResponseBuilder;

pub async fn list_tags_handler(State(state): State<AppState>) -> impl IntoResponse {
    match TagService::list_tags(&state.db).await {
        Ok(res) => ResponseBuilder::success("TAGS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match TagService::get_tag(&state.db, id).await {
        Ok(res) => ResponseBuilder::success("TAG_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

use crate::config::AppState;
use crate::handlers::tag_handler::*;
use axum::{routing::get, Router};

pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tags_handler))
        .route("/{id}", get(get_tag_handler))
}

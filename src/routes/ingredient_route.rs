use crate::config::AppState;
use crate::handlers::ingredient_handler::*;
use axum::{routing::get, Router};

pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ingredients_handler))
        .route("/{id}", get(get_ingredient_handler))
}

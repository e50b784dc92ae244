use crate::config::AppState;
use crate::handlers::user_handler::*;
use axum::{
    routing::{get, post},
    Router,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users_handler))
        .route("/me", get(me_handler))
        .route("/subscriptions", get(list_subscriptions_handler))
        .route("/{id}", get(get_user_handler))
        .route(
            "/{id}/subscribe",
            post(subscribe_handler).delete(unsubscribe_handler),
        )
}

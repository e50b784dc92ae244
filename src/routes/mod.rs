use crate::config::AppState;
use crate::handlers::health_check_handler;
use crate::middleware::auth_middleware::authenticate;
use axum::http::Method;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod auth_route;
pub mod ingredient_route;
pub mod recipe_route;
pub mod tag_route;
pub mod user_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
        ])
        // Allow requests from any origin
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/auth", auth_route::auth_routes())
        .nest("/api/users", user_route::user_routes())
        .nest("/api/tags", tag_route::tag_routes())
        .nest("/api/ingredients", ingredient_route::ingredient_routes())
        .nest("/api/recipes", recipe_route::recipe_routes())
        // Uploaded recipe images
        .nest_service("/media", ServeDir::new(&state.config.media_root))
        .route("/api/health", axum::routing::get(health_check_handler))
        // Resolves the bearer token once for every route; anonymous requests pass through
        .layer(middleware::from_fn_with_state(state, authenticate))
        .layer(cors)
}

use crate::config::AppState;
use crate::handlers::recipe_handler::*;
use axum::{
    routing::{get, post},
    Router,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes_handler).post(create_recipe_handler))
        .route("/download_shopping_cart", get(download_shopping_cart_handler))
        .route(
            "/{id}",
            get(get_recipe_handler)
                .patch(update_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .route(
            "/{id}/favorite",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .route(
            "/{id}/shopping_cart",
            post(add_to_cart_handler).delete(remove_from_cart_handler),
        )
}

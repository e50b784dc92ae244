use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension,
};
use axum_extra::extract::Query;

use crate::config::AppState;
use crate::models::auth_model::{AuthUser, CurrentUser};
use crate::models::recipe_model::{CreateRecipeRequest, RecipeFilterParams, UpdateRecipeRequest};
use crate::services::membership_service::{MembershipKind, MembershipService};
use crate::services::recipe_service::RecipeService;
use crate::services::shopping_list_service::ShoppingListService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_recipes_handler(
    State(state): State<AppState>,
    Extension(AuthUser(viewer)): Extension<AuthUser>,
    Query(params): Query<RecipeFilterParams>,
) -> impl IntoResponse {
    match RecipeService::list_recipes(&state, viewer.as_ref(), params).await {
        Ok(res) => ResponseBuilder::success("RECIPES_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_recipe_handler(
    State(state): State<AppState>,
    Extension(AuthUser(viewer)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match RecipeService::get_recipe(&state.db, viewer.as_ref(), id).await {
        Ok(res) => ResponseBuilder::success("RECIPE_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn create_recipe_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateRecipeRequest>,
) -> impl IntoResponse {
    match RecipeService::create_recipe(&state, &user, payload).await {
        Ok(res) => ResponseBuilder::created("RECIPE_CREATED", "Recipe created", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn update_recipe_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateRecipeRequest>,
) -> impl IntoResponse {
    match RecipeService::update_recipe(&state, &user, id, payload).await {
        Ok(res) => ResponseBuilder::success("RECIPE_UPDATED", "Recipe updated", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match RecipeService::delete_recipe(&state.db, &user, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn add_favorite_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MembershipService::add(&state.db, MembershipKind::Favorite, &user, id).await {
        Ok(res) => {
            ResponseBuilder::created("RECIPE_FAVORITED", "Recipe added to favorites", res)
                .into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MembershipService::remove(&state.db, MembershipKind::Favorite, &user, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MembershipService::add(&state.db, MembershipKind::ShoppingCart, &user, id).await {
        Ok(res) => {
            ResponseBuilder::created("RECIPE_ADDED_TO_CART", "Recipe added to shopping cart", res)
                .into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match MembershipService::remove(&state.db, MembershipKind::ShoppingCart, &user, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn download_shopping_cart_handler(
    State(state): State<AppState>,
    user: CurrentUser,
) -> impl IntoResponse {
    match ShoppingListService::build_shopping_list(&state.db, &user).await {
        Ok(bytes) => {
            let filename = ShoppingListService::attachment_filename(&user.username);
            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

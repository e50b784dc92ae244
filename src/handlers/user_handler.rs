use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};

use crate::config::AppState;
use crate::models::auth_model::{AuthUser, CurrentUser};
use crate::models::user_model::{PageParams, RecipesLimitParams, SubscriptionPageParams};
use crate::services::user_service::UserService;
use crate::utils::api_response::ResponseBuilder;

pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(AuthUser(viewer)): Extension<AuthUser>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    match UserService::list_users(&state, viewer.as_ref(), params).await {
        Ok(res) => ResponseBuilder::success("USERS_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn me_handler(State(state): State<AppState>, user: CurrentUser) -> impl IntoResponse {
    match UserService::get_profile(&state.db, Some(&user), user.id).await {
        Ok(res) => ResponseBuilder::success("PROFILE_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Extension(AuthUser(viewer)): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match UserService::get_profile(&state.db, viewer.as_ref(), id).await {
        Ok(res) => ResponseBuilder::success("USER_FETCHED", "Success", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn list_subscriptions_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<SubscriptionPageParams>,
) -> impl IntoResponse {
    match UserService::list_subscriptions(&state, &user, params).await {
        Ok(res) => {
            ResponseBuilder::success("SUBSCRIPTIONS_FETCHED", "Success", res).into_response()
        }
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn subscribe_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Query(params): Query<RecipesLimitParams>,
) -> impl IntoResponse {
    match UserService::subscribe(&state.db, &user, id, params.recipes_limit).await {
        Ok(res) => ResponseBuilder::created("SUBSCRIBED", "Subscription created", res).into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

pub async fn unsubscribe_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match UserService::unsubscribe(&state.db, &user, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err((status, code, msg)) => ResponseBuilder::error::<()>(status, code, &msg).into_response(),
    }
}

use crate::models::recipe_model::{PaginationMeta, RecipeSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub data: Vec<UserResponse>,
    pub meta: PaginationMeta,
}

/// Author profile enriched with a capped recipe preview, returned by the
/// subscription endpoints.
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummary>,
    pub recipes_count: u64,
}

#[derive(Serialize)]
pub struct SubscriptionListResponse {
    pub data: Vec<SubscriptionResponse>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionPageParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub recipes_limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RecipesLimitParams {
    pub recipes_limit: Option<u64>,
}

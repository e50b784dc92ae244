use crate::models::tag_model::TagResponse;
use crate::models::user_model::UserResponse;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct IngredientAmountRequest {
    pub id: i64,
    pub amount: i32,
}

#[derive(Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,

    // base64 data URI, decoded and stored on disk by the service
    #[serde(default)]
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    #[serde(default)]
    pub cooking_time: i32,

    #[serde(default)]
    pub tags: Vec<i64>,

    #[serde(default)]
    pub ingredients: Vec<IngredientAmountRequest>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateRecipeRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1 to 200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: Option<String>,

    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: Option<String>,

    pub cooking_time: Option<i32>,
    pub tags: Option<Vec<i64>>,
    pub ingredients: Option<Vec<IngredientAmountRequest>>,
}

#[derive(Debug, Serialize)]
pub struct RecipeIngredientResponse {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub tags: Vec<TagResponse>,
    pub author: UserResponse,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
}

/// Short recipe card used in favorites, cart and subscription payloads.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

#[derive(Serialize)]
pub struct RecipeListResponse {
    pub data: Vec<RecipeResponse>,
    pub meta: PaginationMeta,
}

#[derive(Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
pub struct RecipeFilterParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub author: Option<i64>,
    // Repeated query key: ?tags=lunch&tags=dinner
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_favorited: Option<String>,
    pub is_in_shopping_cart: Option<String>,
}

impl RecipeFilterParams {
    pub fn wants_favorited(&self) -> bool {
        truthy(self.is_favorited.as_deref())
    }

    pub fn wants_in_shopping_cart(&self) -> bool {
        truthy(self.is_in_shopping_cart.as_deref())
    }
}

/// One aggregated line of the shopping list. Amounts for the same
/// (name, measurement_unit) pair are already summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// Flag filters accept the spellings the web client actually sends.
pub fn truthy(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true") | Some("True"))
}

pub fn normalize_page(page: Option<u64>) -> u64 {
    page.unwrap_or(1).max(1)
}

pub fn normalize_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_client_spellings() {
        assert!(truthy(Some("1")));
        assert!(truthy(Some("true")));
        assert!(truthy(Some("True")));
        assert!(!truthy(Some("0")));
        assert!(!truthy(Some("false")));
        assert!(!truthy(Some("yes")));
        assert!(!truthy(None));
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page(Some(7)), 7);
    }

    #[test]
    fn limit_falls_back_to_configured_page_size() {
        assert_eq!(normalize_limit(None, 10), 10);
        assert_eq!(normalize_limit(Some(3), 10), 3);
        assert_eq!(normalize_limit(Some(0), 10), 1);
    }
}

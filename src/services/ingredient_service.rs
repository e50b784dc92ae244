use crate::entities::{ingredient, ingredient::Entity as Ingredient};
use crate::models::ingredient_model::{IngredientFilterParams, IngredientResponse};
use axum::http::StatusCode;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::*;

pub struct IngredientService;

impl IngredientService {
    /// Catalog lookup with an optional case-insensitive substring filter,
    /// used by the recipe form's autocomplete.
    pub async fn list_ingredients(
        db: &DatabaseConnection,
        params: IngredientFilterParams,
    ) -> Result<Vec<IngredientResponse>, (StatusCode, &'static str, String)> {
        let mut query = Ingredient::find();

        if let Some(name) = params.name.as_deref() {
            if !name.is_empty() {
                query = query
                    .filter(Expr::col(ingredient::Column::Name).ilike(format!("%{}%", name)));
            }
        }

        let ingredients = query
            .order_by_asc(ingredient::Column::Name)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Failed to fetch ingredients".to_string(),
                )
            })?;

        Ok(ingredients
            .into_iter()
            .map(Self::map_to_response)
            .collect())
    }

    pub async fn get_ingredient(
        db: &DatabaseConnection,
        ingredient_id: i64,
    ) -> Result<IngredientResponse, (StatusCode, &'static str, String)> {
        let found = Ingredient::find_by_id(ingredient_id)
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?
            .ok_or((
                StatusCode::NOT_FOUND,
                "INGREDIENT_NOT_FOUND",
                "Ingredient not found".to_string(),
            ))?;

        Ok(Self::map_to_response(found))
    }

    fn map_to_response(i: ingredient::Model) -> IngredientResponse {
        IngredientResponse {
            id: i.id,
            name: i.name,
            measurement_unit: i.measurement_unit,
        }
    }
}

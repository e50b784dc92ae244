use crate::entities::{ingredient, recipe_ingredient, shopping_cart};
use crate::models::auth_model::CurrentUser;
use crate::models::recipe_model::ShoppingListItem;
use crate::utils::shopping_list_pdf;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use std::collections::BTreeMap;

pub struct ShoppingListService;

impl ShoppingListService {
    /// Collect every composition row of the recipes in the user's cart and
    /// render the aggregated totals as a PDF.
    pub async fn build_shopping_list(
        db: &DatabaseConnection,
        current: &CurrentUser,
    ) -> Result<Vec<u8>, (StatusCode, &'static str, String)> {
        let rows = recipe_ingredient::Entity::find()
            .filter(
                recipe_ingredient::Column::RecipeId.in_subquery(
                    sea_query::Query::select()
                        .column(shopping_cart::Column::RecipeId)
                        .from(shopping_cart::Entity)
                        .and_where(shopping_cart::Column::UserId.eq(current.id))
                        .to_owned(),
                ),
            )
            .find_also_related(ingredient::Entity)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Failed to load cart contents".to_string(),
                )
            })?;

        let mut entries = Vec::with_capacity(rows.len());
        for (row, ing_opt) in rows {
            let ing = ing_opt.ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_CORRUPT",
                "Cart references a missing ingredient".to_string(),
            ))?;
            entries.push((ing.name, ing.measurement_unit, row.amount));
        }

        let items = Self::aggregate(entries);
        if items.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                "SHOPPING_CART_EMPTY",
                "The shopping cart is empty".to_string(),
            ));
        }

        let generated_at = Utc::now().format("%d/%m/%Y %H:%M").to_string();
        shopping_list_pdf::render(&current.username, &generated_at, &items).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PDF_RENDER_ERR",
                format!("Failed to render shopping list: {}", e),
            )
        })
    }

    /// Download filename for the Content-Disposition header. The value is
    /// emitted inside quotes, so quotes, backslashes and control characters
    /// in the username are dropped.
    pub fn attachment_filename(username: &str) -> String {
        let safe: String = username
            .chars()
            .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
            .collect();
        format!("{}_shopping_list.pdf", safe)
    }

    /// Sum amounts per (name, measurement_unit) pair. The same name under two
    /// different units stays on two lines. Output is sorted by name, then unit.
    fn aggregate(entries: Vec<(String, String, i32)>) -> Vec<ShoppingListItem> {
        let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();

        for (name, unit, amount) in entries {
            *totals.entry((name, unit)).or_insert(0) += i64::from(amount);
        }

        totals
            .into_iter()
            .map(|((name, measurement_unit), amount)| ShoppingListItem {
                name,
                measurement_unit,
                amount,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, unit: &str, amount: i32) -> (String, String, i32) {
        (name.to_string(), unit.to_string(), amount)
    }

    #[test]
    fn sums_amounts_across_recipes() {
        // Two recipes in the cart: both use flour, one adds egg, one adds milk
        let entries = vec![
            row("flour", "g", 200),
            row("egg", "pcs", 2),
            row("flour", "g", 100),
            row("milk", "l", 1),
        ];

        let items = ShoppingListService::aggregate(entries);

        assert_eq!(
            items,
            vec![
                ShoppingListItem {
                    name: "egg".to_string(),
                    measurement_unit: "pcs".to_string(),
                    amount: 2,
                },
                ShoppingListItem {
                    name: "flour".to_string(),
                    measurement_unit: "g".to_string(),
                    amount: 300,
                },
                ShoppingListItem {
                    name: "milk".to_string(),
                    measurement_unit: "l".to_string(),
                    amount: 1,
                },
            ]
        );
    }

    #[test]
    fn totals_do_not_depend_on_row_order() {
        let forward = vec![row("flour", "g", 200), row("flour", "g", 100)];
        let backward = vec![row("flour", "g", 100), row("flour", "g", 200)];

        assert_eq!(
            ShoppingListService::aggregate(forward),
            ShoppingListService::aggregate(backward)
        );
    }

    #[test]
    fn same_name_different_unit_stays_separate() {
        let entries = vec![row("sugar", "g", 50), row("sugar", "tbsp", 2)];

        let items = ShoppingListService::aggregate(entries);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].measurement_unit, "g");
        assert_eq!(items[0].amount, 50);
        assert_eq!(items[1].measurement_unit, "tbsp");
        assert_eq!(items[1].amount, 2);
    }

    #[test]
    fn empty_cart_aggregates_to_nothing() {
        assert!(ShoppingListService::aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let entries = vec![
            row("rice", "g", i32::MAX),
            row("rice", "g", i32::MAX),
            row("rice", "g", i32::MAX),
        ];

        let items = ShoppingListService::aggregate(entries);
        assert_eq!(items[0].amount, i64::from(i32::MAX) * 3);
    }

    #[test]
    fn filename_carries_the_username() {
        assert_eq!(
            ShoppingListService::attachment_filename("chef"),
            "chef_shopping_list.pdf"
        );
    }

    #[test]
    fn filename_drops_header_breaking_characters() {
        assert_eq!(
            ShoppingListService::attachment_filename("ch\"ef\r\n"),
            "chef_shopping_list.pdf"
        );
        assert_eq!(
            ShoppingListService::attachment_filename("c\\hef"),
            "chef_shopping_list.pdf"
        );
    }
}

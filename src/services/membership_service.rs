use crate::entities::{favorite, recipe, recipe::Entity as Recipe, shopping_cart};
use crate::models::auth_model::CurrentUser;
use crate::models::recipe_model::RecipeSummary;
use crate::utils::media;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;

/// The two per-user recipe collections. Identical mechanics, separate tables
/// and error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipKind {
    Favorite,
    ShoppingCart,
}

impl MembershipKind {
    fn already_added(&self) -> (&'static str, &'static str) {
        match self {
            MembershipKind::Favorite => {
                ("ALREADY_IN_FAVORITES", "Recipe is already in favorites")
            }
            MembershipKind::ShoppingCart => (
                "ALREADY_IN_SHOPPING_CART",
                "Recipe is already in the shopping cart",
            ),
        }
    }

    fn not_a_member(&self) -> (&'static str, &'static str) {
        match self {
            MembershipKind::Favorite => ("NOT_IN_FAVORITES", "Recipe is not in favorites"),
            MembershipKind::ShoppingCart => {
                ("NOT_IN_SHOPPING_CART", "Recipe is not in the shopping cart")
            }
        }
    }
}

pub struct MembershipService;

impl MembershipService {
    /// Add the recipe to the user's collection. Duplicate additions come back
    /// as 409, whether caught by the pre-check or by the unique index.
    pub async fn add(
        db: &DatabaseConnection,
        kind: MembershipKind,
        current: &CurrentUser,
        recipe_id: i64,
    ) -> Result<RecipeSummary, (StatusCode, &'static str, String)> {
        let rec = Self::find_recipe(db, recipe_id).await?;

        if Self::exists(db, kind, current.id, rec.id).await? {
            let (code, message) = kind.already_added();
            return Err((StatusCode::CONFLICT, code, message.to_string()));
        }

        let inserted = match kind {
            MembershipKind::Favorite => {
                let row = favorite::ActiveModel {
                    id: NotSet,
                    user_id: Set(current.id),
                    recipe_id: Set(rec.id),
                    created_at: Set(Utc::now()),
                };
                row.insert(db).await.map(|_| ())
            }
            MembershipKind::ShoppingCart => {
                let row = shopping_cart::ActiveModel {
                    id: NotSet,
                    user_id: Set(current.id),
                    recipe_id: Set(rec.id),
                    created_at: Set(Utc::now()),
                };
                row.insert(db).await.map(|_| ())
            }
        };

        inserted.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                let (code, message) = kind.already_added();
                (StatusCode::CONFLICT, code, message.to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to save membership: {}", e),
            ),
        })?;

        Ok(RecipeSummary {
            id: rec.id,
            name: rec.name,
            image: media::image_url(rec.image.as_ref()),
            cooking_time: rec.cooking_time,
        })
    }

    /// Remove the recipe from the user's collection. Removing something that
    /// was never added is 404.
    pub async fn remove(
        db: &DatabaseConnection,
        kind: MembershipKind,
        current: &CurrentUser,
        recipe_id: i64,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let rec = Self::find_recipe(db, recipe_id).await?;

        let result = match kind {
            MembershipKind::Favorite => {
                favorite::Entity::delete_many()
                    .filter(favorite::Column::UserId.eq(current.id))
                    .filter(favorite::Column::RecipeId.eq(rec.id))
                    .exec(db)
                    .await
            }
            MembershipKind::ShoppingCart => {
                shopping_cart::Entity::delete_many()
                    .filter(shopping_cart::Column::UserId.eq(current.id))
                    .filter(shopping_cart::Column::RecipeId.eq(rec.id))
                    .exec(db)
                    .await
            }
        };

        let deleted = result.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                "Failed to remove membership".to_string(),
            )
        })?;

        if deleted.rows_affected == 0 {
            let (code, message) = kind.not_a_member();
            return Err((StatusCode::NOT_FOUND, code, message.to_string()));
        }

        Ok(())
    }

    async fn find_recipe(
        db: &DatabaseConnection,
        recipe_id: i64,
    ) -> Result<recipe::Model, (StatusCode, &'static str, String)> {
        Recipe::find_by_id(recipe_id)
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
                "RECIPE_NOT_FOUND",
                "Recipe not found".to_string(),
            ))
    }

    async fn exists(
        db: &DatabaseConnection,
        kind: MembershipKind,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, (StatusCode, &'static str, String)> {
        let found = match kind {
            MembershipKind::Favorite => favorite::Entity::find()
                .filter(favorite::Column::UserId.eq(user_id))
                .filter(favorite::Column::RecipeId.eq(recipe_id))
                .one(db)
                .await
                .map(|row| row.is_some()),
            MembershipKind::ShoppingCart => shopping_cart::Entity::find()
                .filter(shopping_cart::Column::UserId.eq(user_id))
                .filter(shopping_cart::Column::RecipeId.eq(recipe_id))
                .one(db)
                .await
                .map(|row| row.is_some()),
        };

        found.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Database error".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn viewer() -> CurrentUser {
        CurrentUser {
            id: 7,
            username: "chef".to_string(),
            email: "chef@example.com".to_string(),
            is_admin: false,
        }
    }

    fn stored_recipe() -> recipe::Model {
        recipe::Model {
            id: 1,
            author_id: 3,
            name: "Borscht".to_string(),
            text: "Chop and simmer".to_string(),
            image: None,
            cooking_time: 40,
            pub_date: Utc::now(),
        }
    }

    fn stored_favorite(id: i64) -> favorite::Model {
        favorite::Model {
            id,
            user_id: 7,
            recipe_id: 1,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn removing_an_absent_membership_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_recipe()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = MembershipService::remove(&db, MembershipKind::Favorite, &viewer(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1, "NOT_IN_FAVORITES");
    }

    #[tokio::test]
    async fn second_add_of_the_same_recipe_is_a_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_recipe()]])
            .append_query_results([vec![stored_favorite(3)]])
            .into_connection();

        let err = MembershipService::add(&db, MembershipKind::Favorite, &viewer(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
        assert_eq!(err.1, "ALREADY_IN_FAVORITES");
    }

    #[tokio::test]
    async fn add_remove_add_succeeds_on_both_adds() {
        // First add: recipe lookup, no existing row, insert. Remove: recipe
        // lookup, one row deleted. Second add repeats the first sequence.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_recipe()]])
            .append_query_results([Vec::<favorite::Model>::new()])
            .append_query_results([vec![stored_favorite(3)]])
            .append_query_results([vec![stored_recipe()]])
            .append_query_results([vec![stored_recipe()]])
            .append_query_results([Vec::<favorite::Model>::new()])
            .append_query_results([vec![stored_favorite(4)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let user = viewer();
        let first = MembershipService::add(&db, MembershipKind::Favorite, &user, 1).await;
        assert_eq!(first.unwrap().id, 1);

        MembershipService::remove(&db, MembershipKind::Favorite, &user, 1)
            .await
            .unwrap();

        let second = MembershipService::add(&db, MembershipKind::Favorite, &user, 1).await;
        assert_eq!(second.unwrap().id, 1);
    }

    #[test]
    fn error_codes_stay_distinct_per_collection() {
        assert_eq!(
            MembershipKind::Favorite.already_added().0,
            "ALREADY_IN_FAVORITES"
        );
        assert_eq!(
            MembershipKind::ShoppingCart.already_added().0,
            "ALREADY_IN_SHOPPING_CART"
        );
        assert_eq!(MembershipKind::Favorite.not_a_member().0, "NOT_IN_FAVORITES");
        assert_eq!(
            MembershipKind::ShoppingCart.not_a_member().0,
            "NOT_IN_SHOPPING_CART"
        );
    }
}

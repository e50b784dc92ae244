use crate::config::AppState;
use crate::entities::{
    favorite, ingredient, recipe, recipe::Entity as Recipe, recipe_ingredient, recipe_tag,
    shopping_cart, subscription, tag, user,
};
use crate::models::auth_model::CurrentUser;
use crate::models::recipe_model::*;
use crate::models::tag_model::TagResponse;
use crate::models::user_model::UserResponse;
use crate::utils::media;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::*;
use std::collections::HashSet;

pub struct RecipeService;

impl RecipeService {
    pub async fn create_recipe(
        state: &AppState,
        current: &CurrentUser,
        payload: CreateRecipeRequest,
    ) -> Result<RecipeResponse, (StatusCode, &'static str, String)> {
        Self::validate_cooking_time(payload.cooking_time, state.config.min_cooking_time)?;
        Self::validate_ingredients(&payload.ingredients, state.config.min_ingredient_amount)?;
        Self::ensure_unique_identity(&state.db, current.id, &payload.name, &payload.text, None)
            .await?;

        let decoded = media::decode_data_uri(&payload.image)
            .map_err(|e| (StatusCode::BAD_REQUEST, "INVALID_IMAGE", e))?;
        let image_path = media::store_recipe_image(&state.config.media_root, &decoded).map_err(
            |e| (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MEDIA_WRITE_ERR",
                format!("Failed to store image: {}", e),
            ),
        )?;

        // The file is on disk already; a failed insert must not leave it behind
        let saved_id = match Self::persist_create(state, current, payload, &image_path).await {
            Ok(id) => id,
            Err(e) => {
                media::remove_recipe_image(&state.config.media_root, &image_path);
                return Err(e);
            }
        };

        Self::get_recipe(&state.db, Some(current), saved_id).await
    }

    async fn persist_create(
        state: &AppState,
        current: &CurrentUser,
        payload: CreateRecipeRequest,
        image_path: &str,
    ) -> Result<i64, (StatusCode, &'static str, String)> {
        let txn = state.db.begin().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TXN_ERR",
                "Transaction start failed".to_string(),
            )
        })?;

        let new_recipe = recipe::ActiveModel {
            id: NotSet,
            author_id: Set(current.id),
            name: Set(payload.name),
            text: Set(payload.text),
            image: Set(Some(image_path.to_string())),
            cooking_time: Set(payload.cooking_time),
            pub_date: Set(Utc::now()),
        };

        // The unique index backs up the pre-check when two identical submissions race
        let saved = new_recipe.insert(&txn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => (
                StatusCode::CONFLICT,
                "RECIPE_ALREADY_EXISTS",
                "You have already published this recipe".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to create recipe: {}", e),
            ),
        })?;

        Self::link_ingredients(&txn, saved.id, &payload.ingredients).await?;
        Self::link_tags(&txn, saved.id, &payload.tags).await?;

        txn.commit().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TXN_COMMIT_ERR",
                "Transaction commit failed".to_string(),
            )
        })?;

        Ok(saved.id)
    }

    pub async fn get_recipe(
        db: &DatabaseConnection,
        viewer: Option<&CurrentUser>,
        recipe_id: i64,
    ) -> Result<RecipeResponse, (StatusCode, &'static str, String)> {
        let found = Recipe::find_by_id(recipe_id)
            .find_also_related(user::Entity)
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        let (rec, author_opt) = found.ok_or((
            StatusCode::NOT_FOUND,
            "RECIPE_NOT_FOUND",
            "Recipe not found".to_string(),
        ))?;

        let author = author_opt.ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATA_CORRUPT",
            "Recipe has no author".to_string(),
        ))?;

        Self::build_response(db, viewer, rec, author).await
    }

    pub async fn list_recipes(
        state: &AppState,
        viewer: Option<&CurrentUser>,
        params: RecipeFilterParams,
    ) -> Result<RecipeListResponse, (StatusCode, &'static str, String)> {
        let page = normalize_page(params.page);
        let limit = normalize_limit(params.limit, state.config.page_size);

        let mut query = Recipe::find();

        if let Some(author_id) = params.author {
            query = query.filter(recipe::Column::AuthorId.eq(author_id));
        }

        if !params.tags.is_empty() {
            // Any matching slug qualifies; distinct collapses multi-tag hits
            query = query
                .join(JoinType::InnerJoin, recipe::Relation::RecipeTag.def())
                .join(JoinType::InnerJoin, recipe_tag::Relation::Tag.def())
                .filter(tag::Column::Slug.is_in(params.tags.clone()))
                .distinct();
        }

        // Relation filters only apply to signed-in viewers
        if let Some(v) = viewer {
            if params.wants_favorited() {
                query = query.filter(
                    recipe::Column::Id.in_subquery(
                        sea_query::Query::select()
                            .column(favorite::Column::RecipeId)
                            .from(favorite::Entity)
                            .and_where(favorite::Column::UserId.eq(v.id))
                            .to_owned(),
                    ),
                );
            }
            if params.wants_in_shopping_cart() {
                query = query.filter(
                    recipe::Column::Id.in_subquery(
                        sea_query::Query::select()
                            .column(shopping_cart::Column::RecipeId)
                            .from(shopping_cart::Entity)
                            .and_where(shopping_cart::Column::UserId.eq(v.id))
                            .to_owned(),
                    ),
                );
            }
        }

        query = query
            .order_by_desc(recipe::Column::PubDate)
            .order_by_asc(recipe::Column::Id);

        let paginator = query.find_also_related(user::Entity).paginate(&state.db, limit);
        let total = paginator.num_items().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Count failed".to_string(),
            )
        })?;
        let rows = paginator.fetch_page(page - 1).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Fetch failed".to_string(),
            )
        })?;

        let mut data = Vec::new();
        for (rec, author_opt) in rows {
            let author = author_opt.ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_CORRUPT",
                "Recipe has no author".to_string(),
            ))?;
            data.push(Self::build_response(&state.db, viewer, rec, author).await?);
        }

        Ok(RecipeListResponse {
            data,
            meta: PaginationMeta { total, page, limit },
        })
    }

    pub async fn update_recipe(
        state: &AppState,
        current: &CurrentUser,
        recipe_id: i64,
        payload: UpdateRecipeRequest,
    ) -> Result<RecipeResponse, (StatusCode, &'static str, String)> {
        let existing = Recipe::find_by_id(recipe_id)
            .one(&state.db)
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
            ))?;

        if existing.author_id != current.id && !current.is_admin {
            return Err((
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "You are not the author of this recipe".to_string(),
            ));
        }

        if let Some(ct) = payload.cooking_time {
            Self::validate_cooking_time(ct, state.config.min_cooking_time)?;
        }
        if let Some(items) = &payload.ingredients {
            Self::validate_ingredients(items, state.config.min_ingredient_amount)?;
        }

        let next_name = payload.name.clone().unwrap_or_else(|| existing.name.clone());
        let next_text = payload.text.clone().unwrap_or_else(|| existing.text.clone());
        if next_name != existing.name || next_text != existing.text {
            Self::ensure_unique_identity(
                &state.db,
                existing.author_id,
                &next_name,
                &next_text,
                Some(existing.id),
            )
            .await?;
        }

        let image_path = match &payload.image {
            Some(data_uri) => {
                let decoded = media::decode_data_uri(data_uri)
                    .map_err(|e| (StatusCode::BAD_REQUEST, "INVALID_IMAGE", e))?;
                let path = media::store_recipe_image(&state.config.media_root, &decoded)
                    .map_err(|e| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "MEDIA_WRITE_ERR",
                            format!("Failed to store image: {}", e),
                        )
                    })?;
                Some(path)
            }
            None => None,
        };

        let old_image = existing.image.clone();

        let updated_id = match Self::persist_update(state, existing, payload, image_path.clone())
            .await
        {
            Ok(id) => id,
            Err(e) => {
                if let Some(path) = &image_path {
                    media::remove_recipe_image(&state.config.media_root, path);
                }
                return Err(e);
            }
        };

        // A replaced image does not stay behind on disk
        if image_path.is_some() {
            if let Some(old) = &old_image {
                media::remove_recipe_image(&state.config.media_root, old);
            }
        }

        Self::get_recipe(&state.db, Some(current), updated_id).await
    }

    async fn persist_update(
        state: &AppState,
        existing: recipe::Model,
        payload: UpdateRecipeRequest,
        image_path: Option<String>,
    ) -> Result<i64, (StatusCode, &'static str, String)> {
        let txn = state.db.begin().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TXN_ERR",
                "Transaction start failed".to_string(),
            )
        })?;

        let mut active: recipe::ActiveModel = existing.into();
        if let Some(n) = payload.name {
            active.name = Set(n);
        }
        if let Some(t) = payload.text {
            active.text = Set(t);
        }
        if let Some(ct) = payload.cooking_time {
            active.cooking_time = Set(ct);
        }
        if let Some(path) = image_path {
            active.image = Set(Some(path));
        }

        let updated = active.update(&txn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => (
                StatusCode::CONFLICT,
                "RECIPE_ALREADY_EXISTS",
                "You have already published this recipe".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to update recipe: {}", e),
            ),
        })?;

        // Composition lists replace wholesale when supplied
        if let Some(items) = &payload.ingredients {
            recipe_ingredient::Entity::delete_many()
                .filter(recipe_ingredient::Column::RecipeId.eq(updated.id))
                .exec(&txn)
                .await
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DB_WRITE_ERR",
                        "Failed to clear ingredients".to_string(),
                    )
                })?;
            Self::link_ingredients(&txn, updated.id, items).await?;
        }

        if let Some(tag_ids) = &payload.tags {
            recipe_tag::Entity::delete_many()
                .filter(recipe_tag::Column::RecipeId.eq(updated.id))
                .exec(&txn)
                .await
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DB_WRITE_ERR",
                        "Failed to clear tags".to_string(),
                    )
                })?;
            Self::link_tags(&txn, updated.id, tag_ids).await?;
        }

        txn.commit().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TXN_COMMIT_ERR",
                "Transaction commit failed".to_string(),
            )
        })?;

        Ok(updated.id)
    }

    pub async fn delete_recipe(
        db: &DatabaseConnection,
        current: &CurrentUser,
        recipe_id: i64,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let existing = Recipe::find_by_id(recipe_id)
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
            ))?;

        if existing.author_id != current.id && !current.is_admin {
            return Err((
                StatusCode::FORBIDDEN,
                "ACCESS_DENIED",
                "You are not the author of this recipe".to_string(),
            ));
        }

        // Link rows, favorites and cart entries go with it via FK cascade
        Recipe::delete_by_id(existing.id).exec(db).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                "Failed to delete recipe".to_string(),
            )
        })?;

        Ok(())
    }

    async fn build_response(
        db: &DatabaseConnection,
        viewer: Option<&CurrentUser>,
        rec: recipe::Model,
        author: user::Model,
    ) -> Result<RecipeResponse, (StatusCode, &'static str, String)> {
        let tags = rec
            .find_related(tag::Entity)
            .order_by_asc(tag::Column::Name)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Failed to fetch tags".to_string(),
                )
            })?;

        let ingredient_rows = recipe_ingredient::Entity::find()
            .filter(recipe_ingredient::Column::RecipeId.eq(rec.id))
            .order_by_asc(recipe_ingredient::Column::Id)
            .find_also_related(ingredient::Entity)
            .all(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Failed to fetch ingredients".to_string(),
                )
            })?;

        let mut ingredients = Vec::with_capacity(ingredient_rows.len());
        for (row, ing_opt) in ingredient_rows {
            let ing = ing_opt.ok_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_CORRUPT",
                "Recipe references a missing ingredient".to_string(),
            ))?;
            ingredients.push(RecipeIngredientResponse {
                id: ing.id,
                name: ing.name,
                measurement_unit: ing.measurement_unit,
                amount: row.amount,
            });
        }

        let (is_favorited, is_in_shopping_cart, is_subscribed) = match viewer {
            Some(v) => {
                let favorited = favorite::Entity::find()
                    .filter(favorite::Column::UserId.eq(v.id))
                    .filter(favorite::Column::RecipeId.eq(rec.id))
                    .one(db)
                    .await
                    .map_err(|_| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "DB_ERR",
                            "Database error".to_string(),
                        )
                    })?
                    .is_some();

                let in_cart = shopping_cart::Entity::find()
                    .filter(shopping_cart::Column::UserId.eq(v.id))
                    .filter(shopping_cart::Column::RecipeId.eq(rec.id))
                    .one(db)
                    .await
                    .map_err(|_| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "DB_ERR",
                            "Database error".to_string(),
                        )
                    })?
                    .is_some();

                let subscribed = subscription::Entity::find()
                    .filter(subscription::Column::SubscriberId.eq(v.id))
                    .filter(subscription::Column::AuthorId.eq(author.id))
                    .one(db)
                    .await
                    .map_err(|_| {
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "DB_ERR",
                            "Database error".to_string(),
                        )
                    })?
                    .is_some();

                (favorited, in_cart, subscribed)
            }
            None => (false, false, false),
        };

        Ok(RecipeResponse {
            id: rec.id,
            tags: tags
                .into_iter()
                .map(|t| TagResponse {
                    id: t.id,
                    name: t.name,
                    color: t.color,
                    slug: t.slug,
                })
                .collect(),
            author: UserResponse {
                id: author.id,
                email: author.email,
                username: author.username,
                first_name: author.first_name,
                last_name: author.last_name,
                is_subscribed,
            },
            ingredients,
            is_favorited,
            is_in_shopping_cart,
            name: rec.name,
            image: media::image_url(rec.image.as_ref()),
            text: rec.text,
            cooking_time: rec.cooking_time,
        })
    }

    async fn ensure_unique_identity(
        db: &DatabaseConnection,
        author_id: i64,
        name: &str,
        text: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let mut query = Recipe::find()
            .filter(recipe::Column::AuthorId.eq(author_id))
            .filter(recipe::Column::Name.eq(name))
            .filter(recipe::Column::Text.eq(text));

        if let Some(id) = exclude_id {
            query = query.filter(recipe::Column::Id.ne(id));
        }

        let existing = query.one(db).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Database error".to_string(),
            )
        })?;

        if existing.is_some() {
            return Err((
                StatusCode::CONFLICT,
                "RECIPE_ALREADY_EXISTS",
                "You have already published this recipe".to_string(),
            ));
        }

        Ok(())
    }

    async fn link_ingredients<C: ConnectionTrait>(
        txn: &C,
        recipe_id: i64,
        items: &[IngredientAmountRequest],
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let mut links = Vec::with_capacity(items.len());

        for item in items {
            let found = ingredient::Entity::find_by_id(item.id)
                .one(txn)
                .await
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DB_ERR",
                        "Ingredient lookup failed".to_string(),
                    )
                })?
                .ok_or((
                    StatusCode::BAD_REQUEST,
                    "INGREDIENT_NOT_FOUND",
                    format!("Ingredient with id {} not found", item.id),
                ))?;

            links.push(recipe_ingredient::ActiveModel {
                id: NotSet,
                recipe_id: Set(recipe_id),
                ingredient_id: Set(found.id),
                amount: Set(item.amount),
            });
        }

        recipe_ingredient::Entity::insert_many(links)
            .exec(txn)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_WRITE_ERR",
                    "Failed to link ingredients".to_string(),
                )
            })?;

        Ok(())
    }

    async fn link_tags<C: ConnectionTrait>(
        txn: &C,
        recipe_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let mut seen = HashSet::new();

        for tag_id in tag_ids {
            if !seen.insert(*tag_id) {
                continue;
            }

            let found = tag::Entity::find_by_id(*tag_id)
                .one(txn)
                .await
                .map_err(|_| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DB_ERR",
                        "Tag lookup failed".to_string(),
                    )
                })?
                .ok_or((
                    StatusCode::BAD_REQUEST,
                    "TAG_NOT_FOUND",
                    format!("Tag with id {} not found", tag_id),
                ))?;

            let link = recipe_tag::ActiveModel {
                recipe_id: Set(recipe_id),
                tag_id: Set(found.id),
            };
            link.insert(txn).await.map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_WRITE_ERR",
                    "Failed to link tag".to_string(),
                )
            })?;
        }

        Ok(())
    }

    fn validate_cooking_time(
        cooking_time: i32,
        min: i32,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        if cooking_time < min {
            return Err((
                StatusCode::BAD_REQUEST,
                "COOKING_TIME_TOO_SMALL",
                format!("Cooking time must be at least {} minute(s)", min),
            ));
        }
        Ok(())
    }

    fn validate_ingredients(
        items: &[IngredientAmountRequest],
        min_amount: i32,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        if items.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                "INGREDIENTS_EMPTY",
                "At least one ingredient is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.id) {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "INGREDIENT_DUPLICATED",
                    format!("Ingredient {} is listed more than once", item.id),
                ));
            }
            if item.amount < min_amount {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "AMOUNT_TOO_SMALL",
                    format!(
                        "Amount for ingredient {} must be at least {}",
                        item.id, min_amount
                    ),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use base64::prelude::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn entry(id: i64, amount: i32) -> IngredientAmountRequest {
        IngredientAmountRequest { id, amount }
    }

    fn stored_recipe(id: i64, author_id: i64) -> recipe::Model {
        recipe::Model {
            id,
            author_id,
            name: "Borscht".to_string(),
            text: "Chop and simmer".to_string(),
            image: None,
            cooking_time: 40,
            pub_date: Utc::now(),
        }
    }

    fn test_state(db: DatabaseConnection, media_root: &str) -> AppState {
        AppState {
            db,
            config: Config {
                server_host: "127.0.0.1".to_string(),
                server_port: 0,
                database_url: String::new(),
                jwt_secret: "secret".to_string(),
                jwt_expires_in: 60,
                media_root: media_root.to_string(),
                page_size: 10,
                min_cooking_time: 1,
                min_ingredient_amount: 1,
                ingredients_data_path: None,
                tags_data_path: None,
                admin_email: None,
                admin_username: "admin".to_string(),
                admin_password: None,
            },
        }
    }

    fn author() -> CurrentUser {
        CurrentUser {
            id: 7,
            username: "chef".to_string(),
            email: "chef@example.com".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn duplicate_identity_is_a_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored_recipe(1, 7)]])
            .into_connection();

        let err =
            RecipeService::ensure_unique_identity(&db, 7, "Borscht", "Chop and simmer", None)
                .await
                .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
        assert_eq!(err.1, "RECIPE_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn unused_identity_passes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<recipe::Model>::new()])
            .into_connection();

        assert!(
            RecipeService::ensure_unique_identity(&db, 7, "Borscht", "Chop and simmer", None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn failed_create_removes_the_stored_image() {
        // Identity probe finds nothing, the insert succeeds, then the first
        // ingredient lookup comes back empty and the write is abandoned.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<recipe::Model>::new()])
            .append_query_results([vec![stored_recipe(1, 7)]])
            .append_query_results([Vec::<ingredient::Model>::new()])
            .into_connection();

        let media_root =
            std::env::temp_dir().join(format!("recipes-test-{}", uuid::Uuid::new_v4()));
        let state = test_state(db, media_root.to_str().unwrap());

        let payload = CreateRecipeRequest {
            name: "Borscht".to_string(),
            text: "Chop and simmer".to_string(),
            image: format!("data:image/png;base64,{}", BASE64_STANDARD.encode(b"img")),
            cooking_time: 40,
            tags: vec![],
            ingredients: vec![entry(42, 2)],
        };

        let err = RecipeService::create_recipe(&state, &author(), payload)
            .await
            .unwrap_err();
        assert_eq!(err.1, "INGREDIENT_NOT_FOUND");

        let leftover = std::fs::read_dir(media_root.join("recipes/images"))
            .map(|entries| entries.count())
            .unwrap_or(0);
        assert_eq!(leftover, 0);

        let _ = std::fs::remove_dir_all(&media_root);
    }

    #[test]
    fn empty_ingredient_list_is_rejected() {
        let err = RecipeService::validate_ingredients(&[], 1).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1, "INGREDIENTS_EMPTY");
    }

    #[test]
    fn duplicate_ingredient_is_rejected() {
        let items = vec![entry(1, 5), entry(2, 3), entry(1, 7)];
        let err = RecipeService::validate_ingredients(&items, 1).unwrap_err();
        assert_eq!(err.1, "INGREDIENT_DUPLICATED");
        assert!(err.2.contains('1'));
    }

    #[test]
    fn amount_below_minimum_is_rejected() {
        let items = vec![entry(1, 5), entry(2, 0)];
        let err = RecipeService::validate_ingredients(&items, 1).unwrap_err();
        assert_eq!(err.1, "AMOUNT_TOO_SMALL");
    }

    #[test]
    fn amount_exactly_at_minimum_passes() {
        let items = vec![entry(1, 1)];
        assert!(RecipeService::validate_ingredients(&items, 1).is_ok());
    }

    #[test]
    fn configured_minimum_amount_is_honored() {
        let items = vec![entry(1, 5)];
        let err = RecipeService::validate_ingredients(&items, 10).unwrap_err();
        assert_eq!(err.1, "AMOUNT_TOO_SMALL");
        assert!(RecipeService::validate_ingredients(&items, 5).is_ok());
    }

    #[test]
    fn cooking_time_boundary() {
        assert!(RecipeService::validate_cooking_time(1, 1).is_ok());
        let err = RecipeService::validate_cooking_time(0, 1).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1, "COOKING_TIME_TOO_SMALL");
    }
}

use crate::config::AppState;
use crate::entities::{recipe, subscription, user, user::Entity as User};
use crate::models::auth_model::CurrentUser;
use crate::models::recipe_model::{normalize_limit, normalize_page, PaginationMeta, RecipeSummary};
use crate::models::user_model::*;
use crate::utils::media;
use axum::http::StatusCode;
use sea_orm::*;

pub struct UserService;

impl UserService {
    pub async fn get_profile(
        db: &DatabaseConnection,
        viewer: Option<&CurrentUser>,
        user_id: i64,
    ) -> Result<UserResponse, (StatusCode, &'static str, String)> {
        let account = User::find_by_id(user_id)
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
                "USER_NOT_FOUND",
                "User not found".to_string(),
            ))?;

        let is_subscribed = Self::is_subscribed(db, viewer.map(|v| v.id), account.id).await?;

        Ok(Self::map_profile(account, is_subscribed))
    }

    pub async fn list_users(
        state: &AppState,
        viewer: Option<&CurrentUser>,
        params: PageParams,
    ) -> Result<UserListResponse, (StatusCode, &'static str, String)> {
        let page = normalize_page(params.page);
        let limit = normalize_limit(params.limit, state.config.page_size);

        let paginator = User::find()
            .order_by_asc(user::Column::Id)
            .paginate(&state.db, limit);

        let total = paginator.num_items().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Count failed".to_string(),
            )
        })?;
        let accounts = paginator.fetch_page(page - 1).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Fetch failed".to_string(),
            )
        })?;

        let mut data = Vec::with_capacity(accounts.len());
        for account in accounts {
            let is_subscribed =
                Self::is_subscribed(&state.db, viewer.map(|v| v.id), account.id).await?;
            data.push(Self::map_profile(account, is_subscribed));
        }

        Ok(UserListResponse {
            data,
            meta: PaginationMeta { total, page, limit },
        })
    }

    pub async fn subscribe(
        db: &DatabaseConnection,
        current: &CurrentUser,
        author_id: i64,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionResponse, (StatusCode, &'static str, String)> {
        if author_id == current.id {
            return Err((
                StatusCode::BAD_REQUEST,
                "SELF_SUBSCRIPTION",
                "You cannot subscribe to yourself".to_string(),
            ));
        }

        let author = Self::find_author(db, author_id).await?;

        let exists = subscription::Entity::find()
            .filter(subscription::Column::SubscriberId.eq(current.id))
            .filter(subscription::Column::AuthorId.eq(author.id))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        if exists.is_some() {
            return Err((
                StatusCode::CONFLICT,
                "ALREADY_SUBSCRIBED",
                "You are already subscribed to this author".to_string(),
            ));
        }

        let row = subscription::ActiveModel {
            id: NotSet,
            subscriber_id: Set(current.id),
            author_id: Set(author.id),
        };
        row.insert(db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => (
                StatusCode::CONFLICT,
                "ALREADY_SUBSCRIBED",
                "You are already subscribed to this author".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_WRITE_ERR",
                format!("Failed to save subscription: {}", e),
            ),
        })?;

        Self::build_subscription_entry(db, author, recipes_limit).await
    }

    pub async fn unsubscribe(
        db: &DatabaseConnection,
        current: &CurrentUser,
        author_id: i64,
    ) -> Result<(), (StatusCode, &'static str, String)> {
        let author = Self::find_author(db, author_id).await?;

        let deleted = subscription::Entity::delete_many()
            .filter(subscription::Column::SubscriberId.eq(current.id))
            .filter(subscription::Column::AuthorId.eq(author.id))
            .exec(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_WRITE_ERR",
                    "Failed to remove subscription".to_string(),
                )
            })?;

        if deleted.rows_affected == 0 {
            return Err((
                StatusCode::NOT_FOUND,
                "NOT_SUBSCRIBED",
                "You are not subscribed to this author".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn list_subscriptions(
        state: &AppState,
        current: &CurrentUser,
        params: SubscriptionPageParams,
    ) -> Result<SubscriptionListResponse, (StatusCode, &'static str, String)> {
        let page = normalize_page(params.page);
        let limit = normalize_limit(params.limit, state.config.page_size);

        let paginator = subscription::Entity::find()
            .filter(subscription::Column::SubscriberId.eq(current.id))
            .order_by_asc(subscription::Column::AuthorId)
            .paginate(&state.db, limit);

        let total = paginator.num_items().await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Count failed".to_string(),
            )
        })?;
        let subs = paginator.fetch_page(page - 1).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Fetch failed".to_string(),
            )
        })?;

        let mut data = Vec::with_capacity(subs.len());
        for sub in subs {
            let author = User::find_by_id(sub.author_id)
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
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_CORRUPT",
                    "Subscription references a missing author".to_string(),
                ))?;

            data.push(
                Self::build_subscription_entry(&state.db, author, params.recipes_limit).await?,
            );
        }

        Ok(SubscriptionListResponse {
            data,
            meta: PaginationMeta { total, page, limit },
        })
    }

    /// Author profile plus newest recipes, capped when the caller asks for a
    /// preview limit.
    async fn build_subscription_entry(
        db: &DatabaseConnection,
        author: user::Model,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionResponse, (StatusCode, &'static str, String)> {
        let recipes_count = recipe::Entity::find()
            .filter(recipe::Column::AuthorId.eq(author.id))
            .count(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Count failed".to_string(),
                )
            })?;

        let mut query = recipe::Entity::find()
            .filter(recipe::Column::AuthorId.eq(author.id))
            .order_by_desc(recipe::Column::PubDate);
        if let Some(cap) = recipes_limit {
            query = query.limit(cap);
        }

        let previews = query.all(db).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DB_ERR",
                "Fetch failed".to_string(),
            )
        })?;

        Ok(SubscriptionResponse {
            id: author.id,
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes: previews
                .into_iter()
                .map(|r| RecipeSummary {
                    id: r.id,
                    name: r.name,
                    image: media::image_url(r.image.as_ref()),
                    cooking_time: r.cooking_time,
                })
                .collect(),
            recipes_count,
        })
    }

    async fn find_author(
        db: &DatabaseConnection,
        author_id: i64,
    ) -> Result<user::Model, (StatusCode, &'static str, String)> {
        User::find_by_id(author_id)
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
                "USER_NOT_FOUND",
                "User not found".to_string(),
            ))
    }

    async fn is_subscribed(
        db: &DatabaseConnection,
        viewer_id: Option<i64>,
        author_id: i64,
    ) -> Result<bool, (StatusCode, &'static str, String)> {
        let Some(viewer_id) = viewer_id else {
            return Ok(false);
        };

        let found = subscription::Entity::find()
            .filter(subscription::Column::SubscriberId.eq(viewer_id))
            .filter(subscription::Column::AuthorId.eq(author_id))
            .one(db)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DB_ERR",
                    "Database error".to_string(),
                )
            })?;

        Ok(found.is_some())
    }

    fn map_profile(account: user::Model, is_subscribed: bool) -> UserResponse {
        UserResponse {
            id: account.id,
            email: account.email,
            username: account.username,
            first_name: account.first_name,
            last_name: account.last_name,
            is_subscribed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn viewer(id: i64) -> CurrentUser {
        CurrentUser {
            id,
            username: "chef".to_string(),
            email: "chef@example.com".to_string(),
            is_admin: false,
        }
    }

    fn account(id: i64) -> user::Model {
        user::Model {
            id,
            email: format!("user{}@example.com", id),
            username: format!("user{}", id),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password_hash: "x".to_string(),
            is_admin: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn self_subscription_fails_before_touching_the_database() {
        // The empty mock errors on any query, so getting the guard's error
        // back proves nothing was queried first.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = UserService::subscribe(&db, &viewer(7), 7, None)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1, "SELF_SUBSCRIPTION");
    }

    #[tokio::test]
    async fn unsubscribing_without_a_subscription_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![account(3)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = UserService::unsubscribe(&db, &viewer(7), 3)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1, "NOT_SUBSCRIBED");
    }
}

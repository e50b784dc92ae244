use crate::entities::{tag, tag::Entity as Tag};
use crate::models::tag_model::TagResponse;
use axum::http::StatusCode;
use sea_orm::*;

pub struct TagService;

impl TagService {
    pub async fn list_tags(
        db: &DatabaseConnection,
    ) -> Result<Vec<TagResponse>, (StatusCode, &'static str, String)> {
        let tags = Tag::find()
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

        Ok(tags.into_iter().map(Self::map_to_response).collect())
    }

    pub async fn get_tag(
        db: &DatabaseConnection,
        tag_id: i64,
    ) -> Result<TagResponse, (StatusCode, &'static str, String)> {
        let found = Tag::find_by_id(tag_id)
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
                "TAG_NOT_FOUND",
                "Tag not found".to_string(),
            ))?;

        Ok(Self::map_to_response(found))
    }

    fn map_to_response(t: tag::Model) -> TagResponse {
        TagResponse {
            id: t.id,
            name: t.name,
            color: t.color,
            slug: t.slug,
        }
    }
}

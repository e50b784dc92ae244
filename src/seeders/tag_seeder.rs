use crate::config::Config;
use crate::entities::tag;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct TagRecord {
    name: String,
    color: String,
    slug: String,
}

pub async fn seed_tags(db: &DatabaseConnection, config: &Config) -> Result<(), String> {
    let Some(path) = config.tags_data_path.as_deref() else {
        return Ok(());
    };

    let raw = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    let records: Vec<TagRecord> =
        serde_json::from_str(&raw).map_err(|e| format!("{}: {}", path, e))?;

    upsert_tags(db, records).await
}

// Every field carries its own unique index, so a row colliding on any of
// them counts as already present and is skipped.
async fn upsert_tags(db: &DatabaseConnection, records: Vec<TagRecord>) -> Result<(), String> {
    for record in records {
        let exists = tag::Entity::find()
            .filter(
                Condition::any()
                    .add(tag::Column::Name.eq(record.name.as_str()))
                    .add(tag::Column::Color.eq(record.color.as_str()))
                    .add(tag::Column::Slug.eq(record.slug.as_str())),
            )
            .one(db)
            .await
            .map_err(|e| e.to_string())?;

        if exists.is_none() {
            let new_tag = tag::ActiveModel {
                name: Set(record.name.clone()),
                color: Set(record.color),
                slug: Set(record.slug),
                ..Default::default()
            };
            new_tag.insert(db).await.map_err(|e| e.to_string())?;
            tracing::info!("Seeded tag: {}", record.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn row_colliding_on_any_unique_field_is_skipped() {
        // The stored tag shares only the name; an insert would trip the name
        // index, so the row has to be skipped instead.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tag::Model {
                id: 1,
                name: "Lunch".to_string(),
                color: "#49B64E".to_string(),
                slug: "lunch".to_string(),
            }]])
            .into_connection();

        let records = vec![TagRecord {
            name: "Lunch".to_string(),
            color: "#000000".to_string(),
            slug: "midday".to_string(),
        }];

        upsert_tags(&db, records).await.unwrap();

        // One existence probe, no insert afterwards
        assert_eq!(db.into_transaction_log().len(), 1);
    }
}

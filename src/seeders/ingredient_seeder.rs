use crate::config::Config;
use crate::entities::ingredient;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct IngredientRecord {
    name: String,
    measurement_unit: String,
}

pub async fn seed_ingredients(db: &DatabaseConnection, config: &Config) -> Result<(), String> {
    let Some(path) = config.ingredients_data_path.as_deref() else {
        return Ok(());
    };

    let records = load_records(path)?;
    let mut seeded = 0u64;

    for record in records {
        let exists = ingredient::Entity::find()
            .filter(ingredient::Column::Name.eq(record.name.as_str()))
            .filter(ingredient::Column::MeasurementUnit.eq(record.measurement_unit.as_str()))
            .one(db)
            .await
            .map_err(|e| e.to_string())?;

        if exists.is_none() {
            let new_ingredient = ingredient::ActiveModel {
                name: Set(record.name),
                measurement_unit: Set(record.measurement_unit),
                ..Default::default()
            };
            new_ingredient.insert(db).await.map_err(|e| e.to_string())?;
            seeded += 1;
        }
    }

    if seeded > 0 {
        tracing::info!("Seeded {} ingredients from {}", seeded, path);
    }

    Ok(())
}

fn load_records(path: &str) -> Result<Vec<IngredientRecord>, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;

    if path.ends_with(".csv") {
        return parse_csv(&raw);
    }
    serde_json::from_str(&raw).map_err(|e| format!("{}: {}", path, e))
}

// Fixture rows look like `absinthe,g`. Ingredient names may themselves
// contain commas, so the unit is whatever follows the last one.
fn parse_csv(raw: &str) -> Result<Vec<IngredientRecord>, String> {
    let mut records = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, unit) = line
            .rsplit_once(',')
            .ok_or_else(|| format!("Malformed csv row: {}", line))?;
        records.push(IngredientRecord {
            name: name.trim().to_string(),
            measurement_unit: unit.trim().to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::parse_csv;

    #[test]
    fn parses_plain_rows() {
        let records = parse_csv("flour,g\nmilk,ml\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "flour");
        assert_eq!(records[0].measurement_unit, "g");
    }

    #[test]
    fn splits_on_last_comma_only() {
        let records = parse_csv("apricot, pitted,kg").unwrap();
        assert_eq!(records[0].name, "apricot, pitted");
        assert_eq!(records[0].measurement_unit, "kg");
    }

    #[test]
    fn skips_blank_lines() {
        let records = parse_csv("flour,g\n\n  \nmilk,ml").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn rejects_rows_without_a_unit() {
        assert!(parse_csv("flour").is_err());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Debug, Deserialize)]
pub struct IngredientFilterParams {
    // Case-insensitive substring match on the ingredient name
    pub name: Option<String>,
}

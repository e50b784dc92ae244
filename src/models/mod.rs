pub mod auth_model;
pub mod ingredient_model;
pub mod recipe_model;
pub mod tag_model;
pub mod user_model;

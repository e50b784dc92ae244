pub mod admin_seeder;
pub mod ingredient_seeder;
pub mod tag_seeder;

use crate::config::AppState;

pub async fn run_seeders(state: &AppState) -> Result<(), String> {
    // 1. Catalog data first, recipes reference it
    ingredient_seeder::seed_ingredients(&state.db, &state.config).await?;
    tag_seeder::seed_tags(&state.db, &state.config).await?;

    // 2. Admin account, only when credentials are configured
    admin_seeder::seed_admin(&state.db, &state.config).await?;

    Ok(())
}

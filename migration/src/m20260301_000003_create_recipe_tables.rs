use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_users_table::Users;
use crate::m20260301_000002_create_catalog_tables::{Ingredients, Tags};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Recipes. Deleting an author takes their recipes with them.
        manager.create_table(
            Table::create()
                .table(Recipes::Table)
                .if_not_exists()
                .col(ColumnDef::new(Recipes::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Recipes::AuthorId).big_integer().not_null())
                .col(ColumnDef::new(Recipes::Name).string_len(200).not_null())
                .col(ColumnDef::new(Recipes::Text).text().not_null())
                .col(ColumnDef::new(Recipes::Image).string().null())
                .col(ColumnDef::new(Recipes::CookingTime).integer().not_null())
                .col(ColumnDef::new(Recipes::PubDate).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_recipes_author_id")
                        .from(Recipes::Table, Recipes::AuthorId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // The same author may not publish the same (name, text) twice.
        manager.create_index(
            Index::create()
                .name("uq_recipes_author_name_text")
                .table(Recipes::Table)
                .col(Recipes::AuthorId)
                .col(Recipes::Name)
                .col(Recipes::Text)
                .unique()
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_recipes_pub_date")
                .table(Recipes::Table)
                .col(Recipes::PubDate)
                .to_owned(),
        ).await?;

        // 2. Recipe composition rows. Ingredients stay referenced, never deleted
        //    from under a recipe, hence Restrict on the catalog side.
        manager.create_table(
            Table::create()
                .table(RecipeIngredients::Table)
                .if_not_exists()
                .col(ColumnDef::new(RecipeIngredients::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(RecipeIngredients::RecipeId).big_integer().not_null())
                .col(ColumnDef::new(RecipeIngredients::IngredientId).big_integer().not_null())
                .col(ColumnDef::new(RecipeIngredients::Amount).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_recipe_ingredients_recipe_id")
                        .from(RecipeIngredients::Table, RecipeIngredients::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_recipe_ingredients_ingredient_id")
                        .from(RecipeIngredients::Table, RecipeIngredients::IngredientId)
                        .to(Ingredients::Table, Ingredients::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("uq_recipe_ingredients_recipe_ingredient")
                .table(RecipeIngredients::Table)
                .col(RecipeIngredients::RecipeId)
                .col(RecipeIngredients::IngredientId)
                .unique()
                .to_owned(),
        ).await?;

        // 3. Recipe to tag links (many-to-many).
        manager.create_table(
            Table::create()
                .table(RecipeTags::Table)
                .if_not_exists()
                .col(ColumnDef::new(RecipeTags::RecipeId).big_integer().not_null())
                .col(ColumnDef::new(RecipeTags::TagId).big_integer().not_null())
                .primary_key(Index::create().col(RecipeTags::RecipeId).col(RecipeTags::TagId))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_recipe_tags_recipe_id")
                        .from(RecipeTags::Table, RecipeTags::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_recipe_tags_tag_id")
                        .from(RecipeTags::Table, RecipeTags::TagId)
                        .to(Tags::Table, Tags::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RecipeTags::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(RecipeIngredients::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Recipes::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
pub enum Recipes {
    Table,
    Id,
    AuthorId,
    Name,
    Text,
    Image,
    CookingTime,
    PubDate,
}

#[derive(Iden)]
pub enum RecipeIngredients {
    Table,
    Id,
    RecipeId,
    IngredientId,
    Amount,
}

#[derive(Iden)]
pub enum RecipeTags {
    Table,
    RecipeId,
    TagId,
}

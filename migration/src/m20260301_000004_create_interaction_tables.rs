use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_users_table::Users;
use crate::m20260301_000003_create_recipe_tables::Recipes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Favorites. One row per (user, recipe).
        manager.create_table(
            Table::create()
                .table(Favorites::Table)
                .if_not_exists()
                .col(ColumnDef::new(Favorites::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Favorites::UserId).big_integer().not_null())
                .col(ColumnDef::new(Favorites::RecipeId).big_integer().not_null())
                .col(ColumnDef::new(Favorites::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorites_user_id")
                        .from(Favorites::Table, Favorites::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_favorites_recipe_id")
                        .from(Favorites::Table, Favorites::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("uq_favorites_user_recipe")
                .table(Favorites::Table)
                .col(Favorites::UserId)
                .col(Favorites::RecipeId)
                .unique()
                .to_owned(),
        ).await?;

        // 2. Shopping carts. Same shape as favorites, separate table.
        manager.create_table(
            Table::create()
                .table(ShoppingCarts::Table)
                .if_not_exists()
                .col(ColumnDef::new(ShoppingCarts::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(ShoppingCarts::UserId).big_integer().not_null())
                .col(ColumnDef::new(ShoppingCarts::RecipeId).big_integer().not_null())
                .col(ColumnDef::new(ShoppingCarts::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_shopping_carts_user_id")
                        .from(ShoppingCarts::Table, ShoppingCarts::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_shopping_carts_recipe_id")
                        .from(ShoppingCarts::Table, ShoppingCarts::RecipeId)
                        .to(Recipes::Table, Recipes::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("uq_shopping_carts_user_recipe")
                .table(ShoppingCarts::Table)
                .col(ShoppingCarts::UserId)
                .col(ShoppingCarts::RecipeId)
                .unique()
                .to_owned(),
        ).await?;

        // 3. Subscriptions between users.
        manager.create_table(
            Table::create()
                .table(Subscriptions::Table)
                .if_not_exists()
                .col(ColumnDef::new(Subscriptions::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Subscriptions::SubscriberId).big_integer().not_null())
                .col(ColumnDef::new(Subscriptions::AuthorId).big_integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_subscriptions_subscriber_id")
                        .from(Subscriptions::Table, Subscriptions::SubscriberId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_subscriptions_author_id")
                        .from(Subscriptions::Table, Subscriptions::AuthorId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("uq_subscriptions_subscriber_author")
                .table(Subscriptions::Table)
                .col(Subscriptions::SubscriberId)
                .col(Subscriptions::AuthorId)
                .unique()
                .to_owned(),
        ).await?;

        // sea-query has no CHECK builder, so raw SQL for the self-follow guard.
        manager.get_connection().execute_unprepared(
            "ALTER TABLE subscriptions ADD CONSTRAINT chk_subscriptions_no_self_follow CHECK (subscriber_id <> author_id)"
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Subscriptions::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ShoppingCarts::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Favorites::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden)]
enum ShoppingCarts {
    Table,
    Id,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden)]
enum Subscriptions {
    Table,
    Id,
    SubscriberId,
    AuthorId,
}

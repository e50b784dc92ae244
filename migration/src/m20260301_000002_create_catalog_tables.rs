use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Tags catalog. Name, hex color and slug are all unique on their own.
        manager.create_table(
            Table::create()
                .table(Tags::Table)
                .if_not_exists()
                .col(ColumnDef::new(Tags::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Tags::Name).string_len(200).not_null().unique_key())
                .col(ColumnDef::new(Tags::Color).string_len(7).not_null().unique_key())
                .col(ColumnDef::new(Tags::Slug).string_len(200).not_null().unique_key())
                .to_owned(),
        ).await?;

        // 2. Ingredients catalog. The same name may appear with different units,
        //    so uniqueness is on the (name, measurement_unit) pair.
        manager.create_table(
            Table::create()
                .table(Ingredients::Table)
                .if_not_exists()
                .col(ColumnDef::new(Ingredients::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Ingredients::Name).string_len(200).not_null())
                .col(ColumnDef::new(Ingredients::MeasurementUnit).string_len(200).not_null())
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("uq_ingredients_name_measurement_unit")
                .table(Ingredients::Table)
                .col(Ingredients::Name)
                .col(Ingredients::MeasurementUnit)
                .unique()
                .to_owned(),
        ).await?;

        // Ingredient lookup is a substring search on name.
        manager.create_index(
            Index::create()
                .name("idx_ingredients_name")
                .table(Ingredients::Table)
                .col(Ingredients::Name)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ingredients::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tags::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
pub enum Tags {
    Table,
    Id,
    Name,
    Color,
    Slug,
}

#[derive(Iden)]
pub enum Ingredients {
    Table,
    Id,
    Name,
    MeasurementUnit,
}

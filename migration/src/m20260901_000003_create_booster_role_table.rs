use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoosterRole::Table)
                    .if_not_exists()
                    .col(string(BoosterRole::Key).primary_key())
                    .col(string(BoosterRole::RoleId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoosterRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoosterRole {
    Table,
    Key,
    RoleId,
}

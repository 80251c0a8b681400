use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomRole::Table)
                    .if_not_exists()
                    .col(string(CustomRole::Key).primary_key())
                    .col(string(CustomRole::GuildId))
                    .col(string(CustomRole::UserId))
                    .col(string(CustomRole::Name))
                    .col(string(CustomRole::Color))
                    .col(string(CustomRole::Icon).default(""))
                    .col(string_null(CustomRole::RoleId))
                    .col(timestamp(CustomRole::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_custom_role_guild_id")
                    .table(CustomRole::Table)
                    .col(CustomRole::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_custom_role_guild_id")
                    .table(CustomRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomRole {
    Table,
    Key,
    GuildId,
    UserId,
    Name,
    Color,
    Icon,
    RoleId,
    UpdatedAt,
}

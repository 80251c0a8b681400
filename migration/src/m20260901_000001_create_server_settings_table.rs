use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerSettings::Table)
                    .if_not_exists()
                    .col(string(ServerSettings::GuildId).primary_key())
                    .col(integer(ServerSettings::NameSetting).default(0))
                    .col(integer(ServerSettings::IconSetting).default(0))
                    .col(integer(ServerSettings::ColorSetting).default(0))
                    .col(boolean(ServerSettings::AlphanumericOnly).default(false))
                    .col(string(ServerSettings::NameOptions).default(r#"{"Default":"Personal Role"}"#))
                    .col(string(ServerSettings::IconOptions).default(r#"{"None":"NONE"}"#))
                    .col(string(ServerSettings::ColorOptions).default(r##"{"None":"#000000"}"##))
                    .col(string(ServerSettings::ApprovalChannel).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerSettings {
    Table,
    GuildId,
    NameSetting,
    IconSetting,
    ColorSetting,
    AlphanumericOnly,
    NameOptions,
    IconOptions,
    ColorOptions,
    ApprovalChannel,
}

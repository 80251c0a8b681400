use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingReview::Table)
                    .if_not_exists()
                    .col(string(PendingReview::MessageId).primary_key())
                    .col(integer(PendingReview::Kind))
                    .col(string(PendingReview::Payload))
                    .col(string(PendingReview::GuildId))
                    .col(string(PendingReview::ChannelId))
                    .col(string(PendingReview::RequesterId))
                    .col(timestamp(PendingReview::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One outstanding review per requester per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_pending_review_guild_requester")
                    .table(PendingReview::Table)
                    .col(PendingReview::GuildId)
                    .col(PendingReview::RequesterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pending_review_guild_requester")
                    .table(PendingReview::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PendingReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PendingReview {
    Table,
    MessageId,
    Kind,
    Payload,
    GuildId,
    ChannelId,
    RequesterId,
    CreatedAt,
}

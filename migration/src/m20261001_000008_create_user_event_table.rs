use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_workspace_table::Workspace;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(UserEvent::Id))
                    .col(string(UserEvent::WorkspaceId))
                    .col(string_uniq(UserEvent::MessageId))
                    .col(string(UserEvent::UserId))
                    .col(string(UserEvent::EventType))
                    .col(string_null(UserEvent::EventName))
                    .col(text(UserEvent::MessageRaw))
                    .col(timestamp_with_time_zone(UserEvent::OccurredAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_event_workspace_id")
                            .from(UserEvent::Table, UserEvent::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserEvent {
    Table,
    Id,
    WorkspaceId,
    MessageId,
    UserId,
    EventType,
    EventName,
    MessageRaw,
    OccurredAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_workspace_table::Workspace,
    m20261001_000002_create_subscription_group_table::SubscriptionGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Segment::Table)
                    .if_not_exists()
                    .col(string(Segment::Id).primary_key())
                    .col(string(Segment::WorkspaceId))
                    .col(string(Segment::Name))
                    .col(json(Segment::Definition))
                    .col(string(Segment::ResourceType).default("Declarative"))
                    .col(string_null(Segment::SubscriptionGroupId))
                    .col(timestamp_with_time_zone(Segment::CreatedAt))
                    .col(timestamp_with_time_zone(Segment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_segment_workspace_id")
                            .from(Segment::Table, Segment::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_segment_subscription_group_id")
                            .from(Segment::Table, Segment::SubscriptionGroupId)
                            .to(SubscriptionGroup::Table, SubscriptionGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_segment_workspace_id_name")
                    .table(Segment::Table)
                    .col(Segment::WorkspaceId)
                    .col(Segment::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Segment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Segment {
    Table,
    Id,
    WorkspaceId,
    Name,
    Definition,
    ResourceType,
    SubscriptionGroupId,
    CreatedAt,
    UpdatedAt,
}

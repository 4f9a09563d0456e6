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
                    .table(SubscriptionGroup::Table)
                    .if_not_exists()
                    .col(string(SubscriptionGroup::Id).primary_key())
                    .col(string(SubscriptionGroup::WorkspaceId))
                    .col(string(SubscriptionGroup::Name))
                    .col(string(SubscriptionGroup::GroupType))
                    .col(timestamp_with_time_zone(SubscriptionGroup::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_group_workspace_id")
                            .from(SubscriptionGroup::Table, SubscriptionGroup::WorkspaceId)
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
            .drop_table(Table::drop().table(SubscriptionGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionGroup {
    Table,
    Id,
    WorkspaceId,
    Name,
    GroupType,
    CreatedAt,
}

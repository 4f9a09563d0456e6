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
                    .table(Journey::Table)
                    .if_not_exists()
                    .col(string(Journey::Id).primary_key())
                    .col(string(Journey::WorkspaceId))
                    .col(string(Journey::Name))
                    .col(string(Journey::Status).default("NotStarted"))
                    .col(json(Journey::Definition))
                    .col(timestamp_with_time_zone(Journey::CreatedAt))
                    .col(timestamp_with_time_zone(Journey::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journey_workspace_id")
                            .from(Journey::Table, Journey::WorkspaceId)
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
            .drop_table(Table::drop().table(Journey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Journey {
    Table,
    Id,
    WorkspaceId,
    Name,
    Status,
    Definition,
    CreatedAt,
    UpdatedAt,
}

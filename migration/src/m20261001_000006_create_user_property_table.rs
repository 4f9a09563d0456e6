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
                    .table(UserProperty::Table)
                    .if_not_exists()
                    .col(string(UserProperty::Id).primary_key())
                    .col(string(UserProperty::WorkspaceId))
                    .col(string(UserProperty::Name))
                    .col(json(UserProperty::Definition))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_property_workspace_id")
                            .from(UserProperty::Table, UserProperty::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_property_workspace_id_name")
                    .table(UserProperty::Table)
                    .col(UserProperty::WorkspaceId)
                    .col(UserProperty::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProperty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProperty {
    Table,
    Id,
    WorkspaceId,
    Name,
    Definition,
}

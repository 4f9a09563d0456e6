use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_workspace_table::Workspace,
    m20261001_000006_create_user_property_table::UserProperty,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPropertyAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPropertyAssignment::Id))
                    .col(string(UserPropertyAssignment::WorkspaceId))
                    .col(string(UserPropertyAssignment::UserPropertyId))
                    .col(string(UserPropertyAssignment::UserId))
                    .col(string(UserPropertyAssignment::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_property_assignment_workspace_id")
                            .from(UserPropertyAssignment::Table, UserPropertyAssignment::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_property_assignment_user_property_id")
                            .from(UserPropertyAssignment::Table, UserPropertyAssignment::UserPropertyId)
                            .to(UserProperty::Table, UserProperty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_property_assignment_property_user")
                    .table(UserPropertyAssignment::Table)
                    .col(UserPropertyAssignment::UserPropertyId)
                    .col(UserPropertyAssignment::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_property_assignment_value")
                    .table(UserPropertyAssignment::Table)
                    .col(UserPropertyAssignment::WorkspaceId)
                    .col(UserPropertyAssignment::UserPropertyId)
                    .col(UserPropertyAssignment::Value)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPropertyAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserPropertyAssignment {
    Table,
    Id,
    WorkspaceId,
    UserPropertyId,
    UserId,
    Value,
}

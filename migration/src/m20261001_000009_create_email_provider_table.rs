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
                    .table(EmailProvider::Table)
                    .if_not_exists()
                    .col(string(EmailProvider::Id).primary_key())
                    .col(string(EmailProvider::WorkspaceId))
                    .col(string(EmailProvider::ProviderType))
                    .col(string_null(EmailProvider::ApiKey))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_provider_workspace_id")
                            .from(EmailProvider::Table, EmailProvider::WorkspaceId)
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
                    .name("idx_email_provider_workspace_id_type")
                    .table(EmailProvider::Table)
                    .col(EmailProvider::WorkspaceId)
                    .col(EmailProvider::ProviderType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailProvider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailProvider {
    Table,
    Id,
    WorkspaceId,
    ProviderType,
    ApiKey,
}

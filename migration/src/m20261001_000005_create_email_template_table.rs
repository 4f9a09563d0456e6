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
                    .table(EmailTemplate::Table)
                    .if_not_exists()
                    .col(string(EmailTemplate::Id).primary_key())
                    .col(string(EmailTemplate::WorkspaceId))
                    .col(string(EmailTemplate::Name))
                    .col(string(EmailTemplate::FromAddress))
                    .col(string(EmailTemplate::Subject))
                    .col(text(EmailTemplate::Body))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_template_workspace_id")
                            .from(EmailTemplate::Table, EmailTemplate::WorkspaceId)
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
            .drop_table(Table::drop().table(EmailTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmailTemplate {
    Table,
    Id,
    WorkspaceId,
    Name,
    FromAddress,
    Subject,
    Body,
}

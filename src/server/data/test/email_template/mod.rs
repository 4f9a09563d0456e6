use crate::server::{
    data::email_template::EmailTemplateRepository, error::AppError,
    model::email_template::UpsertEmailTemplateParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod upsert;

fn template_param(id: Uuid, workspace_id: Uuid, subject: &str) -> UpsertEmailTemplateParam {
    UpsertEmailTemplateParam {
        id,
        workspace_id,
        name: "Welcome".to_string(),
        from: "hello@example.com".to_string(),
        subject: subject.to_string(),
        body: "<p>Hi</p>".to_string(),
    }
}

//! Email template factory.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test email templates.
pub struct EmailTemplateFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::email_template::Model,
}

impl<'a> EmailTemplateFactory<'a> {
    /// Creates a new EmailTemplateFactory with default values for the given workspace.
    pub fn new(db: &'a DatabaseConnection, workspace_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            entity: entity::email_template::Model {
                id: new_uuid(),
                workspace_id: workspace_id.into(),
                name: format!("Template {}", n),
                from_address: "hello@example.com".to_string(),
                subject: format!("Subject {}", n),
                body: "<p>Hi {{ user.firstName }}</p>".to_string(),
            },
        }
    }

    /// Sets the template name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Builds and inserts the email template.
    pub async fn build(self) -> Result<entity::email_template::Model, DbErr> {
        entity::email_template::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            workspace_id: ActiveValue::Set(self.entity.workspace_id),
            name: ActiveValue::Set(self.entity.name),
            from_address: ActiveValue::Set(self.entity.from_address),
            subject: ActiveValue::Set(self.entity.subject),
            body: ActiveValue::Set(self.entity.body),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an email template with default values.
pub async fn create_email_template(
    db: &DatabaseConnection,
    workspace_id: &str,
) -> Result<entity::email_template::Model, DbErr> {
    EmailTemplateFactory::new(db, workspace_id).build().await
}

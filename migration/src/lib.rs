pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_workspace_table;
mod m20261001_000002_create_subscription_group_table;
mod m20261001_000003_create_segment_table;
mod m20261001_000004_create_journey_table;
mod m20261001_000005_create_email_template_table;
mod m20261001_000006_create_user_property_table;
mod m20261001_000007_create_user_property_assignment_table;
mod m20261001_000008_create_user_event_table;
mod m20261001_000009_create_email_provider_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_workspace_table::Migration),
            Box::new(m20261001_000002_create_subscription_group_table::Migration),
            Box::new(m20261001_000003_create_segment_table::Migration),
            Box::new(m20261001_000004_create_journey_table::Migration),
            Box::new(m20261001_000005_create_email_template_table::Migration),
            Box::new(m20261001_000006_create_user_property_table::Migration),
            Box::new(m20261001_000007_create_user_property_assignment_table::Migration),
            Box::new(m20261001_000008_create_user_event_table::Migration),
            Box::new(m20261001_000009_create_email_provider_table::Migration),
        ]
    }
}

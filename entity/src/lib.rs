//! SeaORM entities for the engagement platform schema.

pub mod prelude;

pub mod email_provider;
pub mod email_template;
pub mod journey;
pub mod segment;
pub mod subscription_group;
pub mod user_event;
pub mod user_property;
pub mod user_property_assignment;
pub mod workspace;

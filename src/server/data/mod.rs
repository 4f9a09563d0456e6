//! Database repository layer for all workspace resources.
//!
//! This module contains repository structs that handle database operations for each
//! resource in the application. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business logic
//! layer. All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod email_provider;
pub mod email_template;
pub mod journey;
pub mod segment;
pub mod subscription_group;
pub mod user_event;
pub mod user_property;
pub mod user_property_assignment;
pub mod workspace;

#[cfg(test)]
mod test;

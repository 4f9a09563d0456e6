//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validating definitions and resolving upload rows into users
//! - **Orchestration**: Coordinating multiple repository calls, such as the journey page
//!   loader's concurrent queries
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod content;
pub mod dashboard;
pub mod journey;
pub mod segment;
pub mod settings;
pub mod subscription_group;
pub mod upload;
pub mod user;
pub mod user_event;
pub mod user_property;
pub mod webhook;

#[cfg(test)]
mod test;

//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! workspace resources and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Stored ids are parsed into `Uuid` and stored JSON definitions are decoded into their
//! typed form during conversion, so a model that exists is a model that is valid.

pub mod email_provider;
pub mod email_template;
pub mod journey;
pub mod segment;
pub mod subscription_group;
pub mod upload;
pub mod user;
pub mod user_event;
pub mod user_property;
pub mod workspace;

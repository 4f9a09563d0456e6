//! Wire types shared by the API controllers and the dashboard loader.
//!
//! Everything here serializes with camelCase field names to match the dashboard client.

pub mod api;
pub mod content;
pub mod dashboard;
pub mod event;
pub mod journey;
pub mod segment;
pub mod settings;
pub mod subscription_group;
pub mod user;
pub mod user_property;
pub mod webhook;
pub mod workspace;

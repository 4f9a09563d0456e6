//! HTTP request handlers.
//!
//! Controllers extract the request, convert DTOs into params, call a service and convert
//! the resulting domain model back into a DTO. Handlers under `/api` are documented with
//! `utoipa` and collected into the OpenAPI document by the router.

pub mod content;
pub mod dashboard;
pub mod debug;
pub mod event;
pub mod index;
pub mod journey;
pub mod segment;
pub mod settings;
pub mod subscription_group;
pub mod user;
pub mod user_property;
pub mod webhook;

#[cfg(test)]
mod test;

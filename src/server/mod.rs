//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Workspace resolution for authorized routes
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, default workspace)
//! - **Startup** (`startup`) - Database connection, migrations and the default workspace
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the workspace from `df-workspace-id` or the default
//! 3. **Controller** validates the body, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

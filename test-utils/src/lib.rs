//! Engagement Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the engagement
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders inserting workspace-scoped records with sensible defaults
//! - **fixture**: In-memory segment and journey definitions
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_segment_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_workspace_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     let workspace = factory::create_workspace(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every record belongs to a workspace, so most factories
//! take the owning workspace id as their first argument.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let workspace = factory::create_workspace(&db).await?;
//! let segment = factory::create_segment(&db, &workspace.id).await?;
//! let (property, assignment) =
//!     factory::helpers::create_email_assignment(&db, &workspace.id, "user-1", "a@b.c").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let journey = factory::journey::JourneyFactory::new(&db, &workspace.id)
//!     .name("Onboarding")
//!     .definition(fixture::journey::invalid_definition())
//!     .build()
//!     .await?;
//! ```

pub mod email_template;
pub mod helpers;
pub mod journey;
pub mod segment;
pub mod subscription_group;
pub mod user_property;
pub mod user_property_assignment;
pub mod workspace;

pub use email_template::create_email_template;
pub use journey::create_journey;
pub use segment::create_segment;
pub use subscription_group::create_subscription_group;
pub use user_property::create_user_property;
pub use user_property_assignment::create_user_property_assignment;
pub use workspace::create_workspace;

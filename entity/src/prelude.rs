pub use super::email_provider::Entity as EmailProvider;
pub use super::email_template::Entity as EmailTemplate;
pub use super::journey::Entity as Journey;
pub use super::segment::Entity as Segment;
pub use super::subscription_group::Entity as SubscriptionGroup;
pub use super::user_event::Entity as UserEvent;
pub use super::user_property::Entity as UserProperty;
pub use super::user_property_assignment::Entity as UserPropertyAssignment;
pub use super::workspace::Entity as Workspace;

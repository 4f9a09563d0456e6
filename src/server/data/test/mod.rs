mod email_provider;
mod email_template;
mod segment;
mod subscription_group;
mod user_event;
mod user_property;
mod user_property_assignment;

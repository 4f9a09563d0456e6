//! Request processing that runs before the controllers.

pub mod workspace;

use crate::server::{
    data::user_property_assignment::UserPropertyAssignmentRepository, error::AppError,
};
use test_utils::{builder::TestBuilder, factory};

mod find_user_ids_by_value;
mod get_users_paginated;

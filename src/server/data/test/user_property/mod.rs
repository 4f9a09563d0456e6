use crate::{
    model::user_property::UserPropertyDefinition,
    server::{
        data::user_property::UserPropertyRepository, error::AppError,
        model::user_property::UpsertUserPropertyParam,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod upsert;

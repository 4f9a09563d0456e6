use crate::{
    model::subscription_group::SubscriptionGroupType,
    server::{
        data::subscription_group::SubscriptionGroupRepository,
        error::AppError,
        model::subscription_group::{shadow_segment_name, UpsertSubscriptionGroupParam},
    },
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod upsert;

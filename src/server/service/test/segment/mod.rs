use crate::{
    model::segment::SegmentDefinition,
    server::{
        error::AppError, model::segment::UpsertSegmentParam, service::segment::SegmentService,
    },
};
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, segment::SegmentFactory},
    fixture,
};
use uuid::Uuid;

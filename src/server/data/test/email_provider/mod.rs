use crate::{
    model::settings::EmailProviderType,
    server::{
        data::email_provider::EmailProviderRepository, error::AppError,
        model::email_provider::UpsertEmailProviderParam,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod upsert;

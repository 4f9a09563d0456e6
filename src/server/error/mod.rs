//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;
pub mod upload;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError, upload::UploadError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `UploadError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Includes aborted transactions.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Stored data could not be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Rejected CSV upload.
    ///
    /// Delegates to `UploadError::into_response()` which always answers 400.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// JSON serialization error while building event payloads.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Request bodies that fail to deserialize are client errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `UploadErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::UploadErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::subscription_group::UploadCsvErrorDto, server::model::upload::RowErrors};

/// Message returned for every rejected CSV upload.
pub const MISFORMATTED_FILE: &str = "misformatted file";

#[derive(Error, Debug)]
pub enum UploadError {
    /// One or more rows failed validation.
    ///
    /// The whole upload is rejected and every row error is returned to the client.
    #[error("{} csv rows failed validation", .0.len())]
    InvalidRows(Vec<RowErrors>),

    /// The CSV could not be read at all (invalid UTF-8, missing `csv` field).
    #[error("Failed to parse csv: {0}")]
    Malformed(#[from] csv::Error),

    /// The multipart body could not be read or had no `csv` field.
    #[error("Missing csv upload: {0}")]
    MissingFile(String),
}

/// Converts upload errors into 400 responses.
///
/// Row validation failures carry the per-row error list; stream level failures
/// only carry the message.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let errors = match self {
            Self::InvalidRows(rows) => Some(rows.into_iter().map(RowErrors::into_dto).collect()),
            Self::Malformed(_) | Self::MissingFile(_) => None,
        };

        (
            StatusCode::BAD_REQUEST,
            Json(UploadCsvErrorDto {
                message: MISFORMATTED_FILE.to_string(),
                errors,
            }),
        )
            .into_response()
    }
}

//! Request extractors shared by the controllers.

use axum::{
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::AppError;

/// JSON extractor and response type that reports body rejections as `AppError`.
///
/// Deserialization failures become `400 Bad Request` with the usual `{ error }` body
/// instead of axum's plain text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

use crate::server::error::AppError;

/// Always fails; used to check that errors reach the logs.
pub async fn boom() -> Result<(), AppError> {
    Err(AppError::InternalError("boom".to_string()))
}

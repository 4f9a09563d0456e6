use crate::server::error::AppError;

/// Rejects a page size of zero.
///
/// # Returns
/// - `Ok(())` - `per_page` is at least 1
/// - `Err(AppError::BadRequest)` - `per_page` is 0
pub fn validate_page_size(per_page: u64) -> Result<(), AppError> {
    if per_page == 0 {
        return Err(AppError::BadRequest(
            "entries must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Number of pages needed to hold `total` items at `per_page` items each.
///
/// Returns 0 when `per_page` is 0.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }

    total.div_ceil(per_page)
}

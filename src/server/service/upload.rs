//! CSV parsing for user uploads.

use std::collections::BTreeMap;

use crate::server::{
    error::upload::UploadError,
    model::upload::{RowErrors, UserUploadRow},
};

/// Parses an uploaded CSV into validated rows.
///
/// The first record is the header. Every following record is keyed by header and
/// validated with `UserUploadRow::validate`. Records may be shorter or longer than the
/// header: missing cells are absent and extra cells are keyed `_{column}`. All invalid
/// rows are collected before failing, so the client sees every problem at once.
///
/// # Arguments
/// - `data` - Raw CSV bytes
///
/// # Returns
/// - `Ok(Vec<UserUploadRow>)` - Every record was valid
/// - `Err(UploadError::InvalidRows)` - One or more records failed validation
/// - `Err(UploadError::Malformed)` - The CSV itself could not be read (invalid UTF-8)
pub fn parse_user_upload_rows(data: &[u8]) -> Result<Vec<UserUploadRow>, UploadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cells: BTreeMap<String, String> = record
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let key = headers
                    .get(column)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("_{}", column));
                (key, cell.to_string())
            })
            .collect();

        match UserUploadRow::validate(cells) {
            Ok(parsed) => rows.push(parsed),
            Err(errors) => {
                tracing::debug!(row, ?errors, "failed to validate csv row");
                row_errors.push(RowErrors { row, errors });
            }
        }
    }

    if !row_errors.is_empty() {
        return Err(UploadError::InvalidRows(row_errors));
    }

    Ok(rows)
}

//! CSV user upload domain models.
//!
//! Each data record of an uploaded CSV becomes a `UserUploadRow` keyed by the header
//! row. A record is accepted when it identifies the user by a non-empty `id` or a
//! non-empty `email`; otherwise it yields `RowErrors` describing why.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::model::subscription_group::{RowErrorsDto, ValueErrorDto};

const ID_COLUMN: &str = "id";
const EMAIL_COLUMN: &str = "email";

/// Validated CSV record.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUploadRow {
    /// Explicit user id, if the `id` cell was present and non-empty.
    pub id: Option<String>,
    /// Email address, if the `email` cell was present and non-empty.
    pub email: Option<String>,
    /// Every cell except `id`, keyed by header. These become identify traits.
    pub traits: BTreeMap<String, String>,
}

impl UserUploadRow {
    /// Validates a header-keyed record.
    ///
    /// # Arguments
    /// - `record` - Map from header name to cell value
    ///
    /// # Returns
    /// - `Ok(UserUploadRow)` - Record carries a non-empty `id` or `email`
    /// - `Err(Vec<ValueError>)` - One error per identifying column that failed
    pub fn validate(mut record: BTreeMap<String, String>) -> Result<Self, Vec<ValueError>> {
        let id = record.remove(ID_COLUMN).filter(|id| !id.is_empty());
        let email = record
            .get(EMAIL_COLUMN)
            .filter(|email| !email.is_empty())
            .cloned();

        if id.is_none() && email.is_none() {
            return Err(vec![
                ValueError::missing(ID_COLUMN),
                ValueError::missing(EMAIL_COLUMN),
            ]);
        }

        Ok(Self {
            id,
            email,
            traits: record,
        })
    }

    /// Traits as a JSON object for the identify payload.
    pub fn traits_json(&self) -> Map<String, Value> {
        self.traits
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect()
    }
}

/// Single validation failure within a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueError {
    /// JSON pointer to the offending field, e.g. `/email`.
    pub path: String,
    pub message: String,
}

impl ValueError {
    fn missing(column: &str) -> Self {
        Self {
            path: format!("/{}", column),
            message: format!("Expected non-empty string for '{}'", column),
        }
    }

    pub fn into_dto(self) -> ValueErrorDto {
        ValueErrorDto {
            path: self.path,
            message: self.message,
        }
    }
}

/// Validation failures for one data record, numbered from 0.
#[derive(Debug, Clone, PartialEq)]
pub struct RowErrors {
    pub row: usize,
    pub errors: Vec<ValueError>,
}

impl RowErrors {
    pub fn into_dto(self) -> RowErrorsDto {
        RowErrorsDto {
            row: self.row,
            errors: self.errors.into_iter().map(ValueError::into_dto).collect(),
        }
    }
}

use uuid::Uuid;

use crate::server::error::internal::InternalError;

/// Parses a stored identifier into a `Uuid`
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed String to `Uuid`
/// - `Err(InternalError::ParseUuid)` - The stored value is not a UUID
pub fn parse_uuid(value: &str) -> Result<Uuid, InternalError> {
    Uuid::parse_str(value).map_err(|e| InternalError::ParseUuid {
        value: value.to_string(),
        source: e,
    })
}

/// Parses client input as a UUID in its canonical hyphenated form.
///
/// `Uuid::parse_str` also accepts the simple, braced and URN forms. Request input only
/// accepts the 36 character hyphenated form.
///
/// # Returns
/// - `Some(Uuid)` - Input is a hyphenated UUID
/// - `None` - Input is anything else
pub fn parse_hyphenated_uuid(value: &str) -> Option<Uuid> {
    if value.len() != 36 {
        return None;
    }

    Uuid::parse_str(value).ok()
}

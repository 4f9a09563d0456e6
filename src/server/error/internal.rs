use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored identifier as a UUID
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse UUID from String '{value}': {source}")]
    ParseUuid {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },

    /// A stored enum column holds a value no variant matches
    #[error("Unknown {field} value '{value}'")]
    UnknownVariant {
        /// Column the value was read from
        field: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// A stored JSON definition does not describe a valid resource
    ///
    /// Raised when converting segments and journeys to their API shape. The journey
    /// page loader recovers from this error; everywhere else it becomes a 500.
    #[error("Invalid {resource} definition for '{id}': {reason}")]
    InvalidDefinition {
        /// Kind of resource, e.g. "segment"
        resource: &'static str,
        /// Id of the offending record
        id: String,
        /// Deserialization or validation failure
        reason: String,
    },
}

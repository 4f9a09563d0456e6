//! User event domain models.
//!
//! Events are stored with their raw JSON payload alongside a few denormalized columns
//! (user id, event type, event name) used for filtering and display.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::{
    model::event::{PaginatedUserEventsDto, UserEventDto},
    server::error::{internal::InternalError, AppError},
};

/// Event type of identify messages.
pub const IDENTIFY: &str = "identify";
/// Event type of track messages.
pub const TRACK: &str = "track";

/// Track event recorded when a user's subscription changes.
pub const SUBSCRIPTION_CHANGE_EVENT: &str = "DFSubscriptionChange";

/// `properties.action` of a subscription change that adds the user to the group.
pub const SUBSCRIBE_ACTION: &str = "Subscribe";

/// Stored analytics event.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEvent {
    pub message_id: String,
    pub user_id: String,
    pub event_type: String,
    pub event_name: Option<String>,
    pub occurred_at: DateTime<Utc>,
    pub payload: Value,
}

impl UserEvent {
    /// Converts an entity model to a user event, decoding the raw payload.
    ///
    /// # Returns
    /// - `Ok(UserEvent)` - The decoded event
    /// - `Err(AppError::InternalErr(InvalidDefinition))` - Stored payload is not JSON
    pub fn from_entity(entity: entity::user_event::Model) -> Result<Self, AppError> {
        let payload = serde_json::from_str(&entity.message_raw).map_err(|e| {
            InternalError::InvalidDefinition {
                resource: "user event",
                id: entity.message_id.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            message_id: entity.message_id,
            user_id: entity.user_id,
            event_type: entity.event_type,
            event_name: entity.event_name,
            occurred_at: entity.occurred_at,
            payload,
        })
    }

    pub fn into_dto(self) -> UserEventDto {
        UserEventDto {
            message_id: self.message_id,
            user_id: self.user_id,
            event_type: self.event_type,
            event: self.event_name,
            occurred_at: self.occurred_at,
            payload: self.payload,
        }
    }
}

/// Event ready for insertion.
///
/// `message_raw` is the serialized payload; the remaining fields duplicate parts of it
/// for the denormalized columns.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertUserEvent {
    pub message_id: String,
    pub user_id: String,
    pub event_type: String,
    pub event_name: Option<String>,
    pub occurred_at: DateTime<Utc>,
    pub message_raw: String,
}

impl InsertUserEvent {
    /// Builds an identify event setting `traits` on the user.
    ///
    /// # Returns
    /// - `Ok(InsertUserEvent)` - Event with payload
    ///   `{ userId, timestamp, type: "identify", traits }`
    /// - `Err(serde_json::Error)` - Payload failed to serialize
    pub fn identify(
        message_id: String,
        user_id: String,
        traits: Map<String, Value>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        let message_raw = serde_json::to_string(&json!({
            "userId": user_id,
            "timestamp": format_timestamp(&timestamp),
            "type": IDENTIFY,
            "traits": traits,
        }))?;

        Ok(Self {
            message_id,
            user_id,
            event_type: IDENTIFY.to_string(),
            event_name: None,
            occurred_at: timestamp,
            message_raw,
        })
    }

    /// Builds a track event named `event` with the given properties.
    ///
    /// # Returns
    /// - `Ok(InsertUserEvent)` - Event with payload
    ///   `{ userId, timestamp, type: "track", event, properties }`
    /// - `Err(serde_json::Error)` - Payload failed to serialize
    pub fn track(
        message_id: String,
        user_id: String,
        event: &str,
        properties: Value,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, serde_json::Error> {
        let message_raw = serde_json::to_string(&json!({
            "userId": user_id,
            "timestamp": format_timestamp(&timestamp),
            "type": TRACK,
            "event": event,
            "properties": properties,
        }))?;

        Ok(Self {
            message_id,
            user_id,
            event_type: TRACK.to_string(),
            event_name: Some(event.to_string()),
            occurred_at: timestamp,
            message_raw,
        })
    }
}

/// ISO 8601 timestamp with millisecond precision and a `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Page of user events with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUserEvents {
    pub events: Vec<UserEvent>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUserEvents {
    pub fn into_dto(self) -> PaginatedUserEventsDto {
        PaginatedUserEventsDto {
            events: self.events.into_iter().map(UserEvent::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

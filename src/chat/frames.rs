//! Websocket frame decoding.
//!
//! Frames look like `{"r190503": {"e": [<event>, ...], "t": ..., "d": ...}}`
//! and may carry events for several rooms at once.

use serde::Deserialize as _;
use serde_json::Value;

use crate::domain::ChatEvent;

/// Extracts the events addressed to `room_id` from one websocket frame.
///
/// Malformed frames and events are dropped with a debug log.
#[must_use]
pub fn parse_frame(frame: &str, room_id: u64) -> Vec<ChatEvent> {
    let value: Value = match serde_json::from_str(frame) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "ignoring non-JSON chat frame");
            return Vec::new();
        }
    };

    let key = format!("r{room_id}");
    let Some(events) = value
        .get(&key)
        .and_then(|room| room.get("e"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    events
        .iter()
        .filter_map(|raw| match ChatEvent::deserialize(raw) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed chat event");
                None
            }
        })
        .collect()
}

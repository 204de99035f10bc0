use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a published message, carrying stream metadata.
///
/// Notes:
/// - `sequence_number` is the state version after the change was applied, so it
///   increases monotonically per publishing state machine.
/// - `payload` is whatever the publisher chose to broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    stream: String,

    /// Monotonically increasing position in the stream.
    sequence_number: u64,

    occurred_at: DateTime<Utc>,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        stream: impl Into<String>,
        sequence_number: u64,
        occurred_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            stream: stream.into(),
            sequence_number,
            occurred_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_payload() {
        let env = EventEnvelope::new("catalog.filter", 3, Utc::now(), "payload".to_string());
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["stream"], "catalog.filter");
        assert_eq!(json["sequence_number"], 3);
        assert_eq!(json["payload"], "payload");

        let back: EventEnvelope<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, env);
    }

    #[test]
    fn envelope_keeps_timestamp_and_assigns_distinct_ids() {
        let at = Utc::now();
        let first = EventEnvelope::new("catalog.filter", 1, at, ());
        let second = EventEnvelope::new("catalog.filter", 2, at, ());

        assert_eq!(first.occurred_at(), at);
        assert_eq!(first.event_id().get_version_num(), 7);
        assert_ne!(first.event_id(), second.event_id());
    }
}

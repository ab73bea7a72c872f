use bevy_ecs::resource::Resource;

use crate::ids::EventTriggerType;

/// A fired game event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub id: u64,
    pub trigger: EventTriggerType,
    pub description: String,
    pub data: serde_json::Value,
}

/// Accumulates every event that actually fired, in firing order.
/// Canceled firings leave no record.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events that fired for a given trigger.
    pub fn with_trigger(&self, trigger: EventTriggerType) -> impl Iterator<Item = &EventRecord> {
        self.events.iter().filter(move |e| e.trigger == trigger)
    }
}

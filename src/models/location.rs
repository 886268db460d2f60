//! Location model.
//!
//! A location accumulates unavailability as events are booked into it.

use serde::{Deserialize, Serialize};

use super::TimeSet;

/// A place where events can be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    unavailability: TimeSet,
    events: Vec<String>,
}

impl Location {
    /// Creates a location with no bookings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unavailability: TimeSet::empty(),
            events: Vec::new(),
        }
    }

    /// The location's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The times at which this location is already taken.
    pub fn unavailability(&self) -> &TimeSet {
        &self.unavailability
    }

    /// Names of the events booked here, in booking order.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Books an event: unions its time into the unavailability and
    /// records the event name.
    pub fn add_booking(&mut self, event: impl Into<String>, time: &TimeSet) {
        self.unavailability = self.unavailability.union(time);
        self.events.push(event.into());
    }

    /// Clears all bookings and unavailability.
    pub fn reset(&mut self) {
        self.unavailability = TimeSet::empty();
        self.events.clear();
    }
}

//! Timetable: the finished schedule.
//!
//! Holds every committed event in commit order and supports exact lookup
//! by time slot and location.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{ScheduledEvent, TimeSet};

/// An ordered collection of scheduled events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "TimetableRecord")]
pub struct Timetable {
    name: String,
    events: Vec<ScheduledEvent>,
    // Exact time slot → indices into `events`; rebuilt on deserialize.
    #[serde(skip)]
    by_time: HashMap<TimeSet, Vec<usize>>,
}

/// Serialized shape of a [`Timetable`].
#[derive(Deserialize)]
struct TimetableRecord {
    name: String,
    events: Vec<ScheduledEvent>,
}

impl From<TimetableRecord> for Timetable {
    fn from(record: TimetableRecord) -> Self {
        Timetable::with_name(record.name, record.events)
    }
}

impl Timetable {
    /// Creates a timetable over the given events, in commit order.
    pub fn new(events: Vec<ScheduledEvent>) -> Self {
        Self::with_name("Timetable", events)
    }

    /// Creates a named timetable.
    pub fn with_name(name: impl Into<String>, events: Vec<ScheduledEvent>) -> Self {
        let mut by_time: HashMap<TimeSet, Vec<usize>> = HashMap::new();
        for (index, event) in events.iter().enumerate() {
            by_time.entry(event.time.clone()).or_default().push(index);
        }
        Self {
            name: name.into(),
            events,
            by_time,
        }
    }

    /// The timetable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scheduled events, in commit order.
    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// Number of scheduled events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the timetable holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The event occupying exactly this time slot at this location, or
    /// `None` if absent. The time set must match the committed slot
    /// exactly; containment is not enough.
    pub fn event_at(&self, time: &TimeSet, location: &str) -> Option<&ScheduledEvent> {
        self.by_time.get(time)?.iter().map(|&i| &self.events[i]).find(|e| e.location == location)
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

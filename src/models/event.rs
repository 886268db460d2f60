//! Event models.
//!
//! An [`EventRequest`] describes an event that still needs a time: who
//! attends, where it happens, how long it runs, and how urgently it
//! should be placed. A [`ScheduledEvent`] is the finished record, created
//! only by [`ScheduledEvent::commit`], which also applies the resulting
//! availability reduction to the roster.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ScheduleError};

use super::{Roster, RosterError, TimeSet};

/// An event awaiting a concrete time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// Event name; unique within one scheduling run.
    pub name: String,
    /// Name of the attending group.
    pub group: String,
    /// Name of the hosting location.
    pub location: String,
    /// Length of the event in hours.
    pub duration: f64,
    /// Higher-priority events are placed first.
    pub priority: i32,
}

impl EventRequest {
    /// Creates an event request with priority 0.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        location: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            location: location.into(),
            duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The times this event could occupy: the group's common availability
    /// minus the location's existing bookings.
    pub fn availability(&self, roster: &Roster) -> std::result::Result<TimeSet, RosterError> {
        let group = roster.group(&self.group)?;
        let location = roster.location(&self.location)?;
        Ok(group.availability(roster)?.subtract(location.unavailability()))
    }

    /// Every chunk-aligned window of this event's duration within its
    /// availability, ascending by start time.
    pub fn options(&self, roster: &Roster, chunk_size: f64) -> Result<Vec<TimeSet>> {
        Ok(self
            .availability(roster)?
            .windows_of(self.duration, chunk_size)?)
    }

    /// The union of all options: the usable portion of the availability
    /// once quantization trims unusable fragments and tails.
    pub fn option_space(&self, roster: &Roster, chunk_size: f64) -> Result<TimeSet> {
        let mut space = TimeSet::empty();
        for option in self.options(roster, chunk_size)? {
            space = space.union(&option);
        }
        Ok(space)
    }

    /// Whether scheduling this event can never affect `other`'s options:
    /// different locations and no shared group members.
    pub fn independent_from(
        &self,
        other: &EventRequest,
        roster: &Roster,
    ) -> std::result::Result<bool, RosterError> {
        if self.location == other.location {
            return Ok(false);
        }
        let mine = roster.group(&self.group)?;
        let theirs = roster.group(&other.group)?;
        Ok(!mine.shares_members_with(theirs))
    }
}

impl fmt::Display for EventRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}h, {} @ {})",
            self.name, self.duration, self.group, self.location
        )
    }
}

/// An event with a committed time slot. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Event name.
    pub name: String,
    /// Name of the attending group.
    pub group: String,
    /// Name of the hosting location.
    pub location: String,
    /// The committed time slot.
    pub time: TimeSet,
}

impl ScheduledEvent {
    /// Commits `event` to `slot`, applying the availability reduction:
    /// the slot is subtracted from every group member's current
    /// availability and booked on the location. Returns the finished
    /// record.
    ///
    /// This is the only way shared availability state changes during a
    /// scheduling run.
    pub fn commit(event: &EventRequest, slot: TimeSet, roster: &mut Roster) -> Result<Self> {
        let members: Vec<String> = roster
            .group(&event.group)?
            .members()
            .map(str::to_owned)
            .collect();
        for member in &members {
            let person = roster.person_mut(member)?;
            let reduced = person.current_availability().subtract(&slot);
            person.set_current_availability(reduced);
        }
        roster
            .location_mut(&event.location)?
            .add_booking(&event.name, &slot);

        info!("scheduled {} at {}", event.name, slot);
        Ok(Self {
            name: event.name.clone(),
            group: event.group.clone(),
            location: event.location.clone(),
            time: slot,
        })
    }
}

impl fmt::Display for ScheduledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} @ {} ({})",
            self.name, self.time, self.location, self.group
        )
    }
}

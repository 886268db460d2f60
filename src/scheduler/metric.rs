//! Option metric: lookahead scoring for one candidate slot.
//!
//! Placing an event consumes its group members' time everywhere and its
//! location's time at one place. The metric quantifies that damage before
//! committing: for a fixed event and candidate slot, it counts how many
//! placements every *other* pending event would retain if the slot were
//! taken. The greedy scheduler keeps the candidate whose metric compares
//! best.

use log::trace;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Result, ScheduleError};
use crate::models::{EventRequest, Roster, TimeSet};

/// A lookahead score for scheduling one event into one candidate slot.
///
/// Built fresh per (event, candidate) pair, consumed immediately for
/// comparison, never mutated.
#[derive(Debug, Clone)]
pub struct OptionMetric {
    slot: TimeSet,
    total_options: usize,
    chunk_size: f64,
    per_event_options: HashMap<String, usize>,
}

impl OptionMetric {
    /// Scores the candidate `slot` for `event` against every other event
    /// in `pending`.
    ///
    /// For a pending event that shares `event`'s location or at least one
    /// group member, the slot is removed from its usable time before its
    /// remaining windows are counted; fully independent events keep their
    /// count unchanged. `usable_times` maps event names to their current
    /// usable time (the scheduler passes cached option spaces); an event
    /// missing from the map is recomputed from the roster.
    ///
    /// Fails if `slot` is not fully contained in `event`'s availability.
    pub fn evaluate(
        event: &EventRequest,
        slot: TimeSet,
        pending: &[EventRequest],
        usable_times: &HashMap<String, TimeSet>,
        roster: &Roster,
        chunk_size: f64,
    ) -> Result<Self> {
        if !event.availability(roster)?.contains(&slot) {
            return Err(ScheduleError::SlotOutsideAvailability(event.name.clone()));
        }

        let mut per_event_options = HashMap::new();
        let mut total_options = 0;
        for other in pending {
            if other.name == event.name {
                continue;
            }
            let usable = match usable_times.get(&other.name) {
                Some(cached) => cached.clone(),
                None => other.option_space(roster, chunk_size)?,
            };
            let affected = !event.independent_from(other, roster)?;
            let count = if affected {
                usable.subtract(&slot).windows_of(other.duration, chunk_size)?.len()
            } else {
                usable.windows_of(other.duration, chunk_size)?.len()
            };
            trace!("{} keeps {count} option(s) if {} takes {slot}", other.name, event.name);
            total_options += count;
            per_event_options.insert(other.name.clone(), count);
        }

        Ok(Self {
            slot,
            total_options,
            chunk_size,
            per_event_options,
        })
    }

    /// Scores the empty slot against every event in `pending`: each
    /// event's option count unchanged. Seeds the scheduler's selection
    /// state before the first commit.
    pub fn baseline(
        pending: &[EventRequest],
        usable_times: &HashMap<String, TimeSet>,
        roster: &Roster,
        chunk_size: f64,
    ) -> Result<Self> {
        let mut per_event_options = HashMap::new();
        let mut total_options = 0;
        for event in pending {
            let usable = match usable_times.get(&event.name) {
                Some(cached) => cached.clone(),
                None => event.option_space(roster, chunk_size)?,
            };
            let count = usable.windows_of(event.duration, chunk_size)?.len();
            total_options += count;
            per_event_options.insert(event.name.clone(), count);
        }
        Ok(Self {
            slot: TimeSet::empty(),
            total_options,
            chunk_size,
            per_event_options,
        })
    }

    /// The candidate slot this metric scores.
    pub fn slot(&self) -> &TimeSet {
        &self.slot
    }

    /// Sum of all other events' remaining option counts.
    pub fn total_options(&self) -> usize {
        self.total_options
    }

    /// The quantization granularity the counts were taken at.
    pub fn chunk_size(&self) -> f64 {
        self.chunk_size
    }

    /// The recorded option count for one event, if it was scored.
    pub fn options_of(&self, event_name: &str) -> Option<usize> {
        self.per_event_options.get(event_name).copied()
    }

    /// Whether some scored event would be left with no placement at all.
    pub fn has_zero(&self) -> bool {
        self.per_event_options.values().any(|&count| count == 0)
    }

    /// Quality ordering; `Greater` means `self` is the better choice.
    ///
    /// A metric that strands some event (`has_zero`) is strictly worse
    /// than one that does not. With equal zero-status, more total options
    /// wins; two stranding metrics compare equal regardless of totals.
    /// Callers break remaining ties by keeping the first candidate seen.
    pub fn quality(&self, other: &OptionMetric) -> Ordering {
        match (self.has_zero(), other.has_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.total_options.cmp(&other.total_options),
        }
    }

    /// Whether `self` beats `other`; a missing incumbent always loses.
    pub fn is_better_than(&self, other: Option<&OptionMetric>) -> bool {
        match other {
            None => true,
            Some(other) => self.quality(other) == Ordering::Greater,
        }
    }
}

//! Greedy lookahead scheduler.
//!
//! # Algorithm
//!
//! Repeats until every event is placed, committing exactly one event per
//! iteration:
//!
//! 1. Select the next event: highest priority first, then fewest recorded
//!    options, then longest duration, then largest group; scan order is
//!    input order and the first event seen wins full ties.
//! 2. Select the best slot: candidates ascend by start time; each is
//!    scored with an [`OptionMetric`] and replaces the incumbent only
//!    when strictly better. No candidates at all aborts the whole run.
//! 3. Commit the winner, which shrinks the group members' and location's
//!    availability, then recompute every remaining event's usable time.
//!
//! Both scan orders are deterministic, so a given input always produces
//! the same timetable.
//!
//! # Complexity
//!
//! O(n) commits; each scores O(m) candidate slots against O(n) other
//! events, roughly O(n²·m) set operations overall.

use log::{debug, info};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Result, ScheduleError};
use crate::models::{EventRequest, Roster, ScheduledEvent, TimeSet, Timetable};

use super::OptionMetric;

/// Greedy scheduler that maximizes the remaining events' options at
/// every commitment.
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    chunk_size: f64,
}

impl GreedyScheduler {
    /// Creates a scheduler that aligns every slot to `chunk_size` hours.
    pub fn new(chunk_size: f64) -> Self {
        Self { chunk_size }
    }

    /// The quantization granularity in hours.
    pub fn chunk_size(&self) -> f64 {
        self.chunk_size
    }

    /// Schedules every event against the roster, consuming availability
    /// as it goes. Returns the timetable in commit order.
    ///
    /// Fails with [`ScheduleError::NoEvents`] for an empty event list and
    /// [`ScheduleError::NoFeasibleSlot`] as soon as any event has nowhere
    /// left to go; no partial timetable is returned.
    pub fn schedule(
        &self,
        events: Vec<EventRequest>,
        roster: &mut Roster,
    ) -> Result<Timetable> {
        if events.is_empty() {
            return Err(ScheduleError::NoEvents);
        }

        let mut pending = events;
        let mut scheduled = Vec::with_capacity(pending.len());
        let mut usable_times = self.usable_times(&pending, roster)?;
        let mut current_metric =
            OptionMetric::baseline(&pending, &usable_times, roster, self.chunk_size)?;

        while !pending.is_empty() {
            let next = pending.remove(self.select_next(&pending, &current_metric, roster)?);
            let best = self.select_slot(&next, &pending, &usable_times, roster)?;

            let committed = ScheduledEvent::commit(&next, best.slot().clone(), roster)?;
            scheduled.push(committed);
            current_metric = best;
            usable_times = self.usable_times(&pending, roster)?;
        }

        Ok(Timetable::new(scheduled))
    }

    /// Index of the event to place next, under the selection total order.
    fn select_next(
        &self,
        pending: &[EventRequest],
        current_metric: &OptionMetric,
        roster: &Roster,
    ) -> Result<usize> {
        let mut best = 0;
        for candidate in 1..pending.len() {
            let order = self.selection_order(
                &pending[candidate],
                &pending[best],
                current_metric,
                roster,
            )?;
            if order == Ordering::Less {
                best = candidate;
            }
        }
        Ok(best)
    }

    /// Selection total order: `Less` means `a` is scheduled sooner.
    ///
    /// Levels: higher priority, fewer recorded options, longer duration,
    /// larger group. Events absent from the metric count zero options.
    fn selection_order(
        &self,
        a: &EventRequest,
        b: &EventRequest,
        current_metric: &OptionMetric,
        roster: &Roster,
    ) -> Result<Ordering> {
        let by_priority = b.priority.cmp(&a.priority);
        if by_priority != Ordering::Equal {
            return Ok(by_priority);
        }
        let options_a = current_metric.options_of(&a.name).unwrap_or(0);
        let options_b = current_metric.options_of(&b.name).unwrap_or(0);
        if options_a != options_b {
            return Ok(options_a.cmp(&options_b));
        }
        let by_duration = b.duration.total_cmp(&a.duration);
        if by_duration != Ordering::Equal {
            return Ok(by_duration);
        }
        let size_a = roster.group(&a.group)?.len();
        let size_b = roster.group(&b.group)?.len();
        Ok(size_b.cmp(&size_a))
    }

    /// The best-scoring candidate slot for `event`, first-seen wins ties.
    fn select_slot(
        &self,
        event: &EventRequest,
        pending: &[EventRequest],
        usable_times: &HashMap<String, TimeSet>,
        roster: &Roster,
    ) -> Result<OptionMetric> {
        let candidates = event.options(roster, self.chunk_size)?;
        debug!("{} has {} candidate slot(s)", event.name, candidates.len());

        let mut best: Option<OptionMetric> = None;
        for slot in candidates {
            let metric = OptionMetric::evaluate(
                event,
                slot,
                pending,
                usable_times,
                roster,
                self.chunk_size,
            )?;
            if metric.is_better_than(best.as_ref()) {
                debug!(
                    "{} now prefers {} ({} option(s) retained)",
                    event.name,
                    metric.slot(),
                    metric.total_options()
                );
                best = Some(metric);
            }
        }
        match best {
            Some(metric) => Ok(metric),
            None => {
                info!("aborting: no feasible slot for {}", event.name);
                Err(ScheduleError::NoFeasibleSlot(event.name.clone()))
            }
        }
    }

    /// Recomputes every pending event's usable time (its quantized option
    /// space). Called after every commit; events unrelated to the commit
    /// are conservatively recomputed too.
    fn usable_times(
        &self,
        pending: &[EventRequest],
        roster: &Roster,
    ) -> Result<HashMap<String, TimeSet>> {
        let mut map = HashMap::with_capacity(pending.len());
        for event in pending {
            map.insert(
                event.name.clone(),
                event.option_space(roster, self.chunk_size)?,
            );
        }
        Ok(map)
    }
}

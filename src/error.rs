//! Error types for scheduling runs.

use thiserror::Error;

use crate::models::{RosterError, TimeError};

/// Result type for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort a scheduling run.
///
/// Every variant is fatal to the current run: there is no retry policy
/// and no partial output. Construction-invalid input surfaces as
/// [`ScheduleError::Time`] at the offending call site.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A schedule was requested for an empty event list.
    #[error("cannot construct a schedule with no events")]
    NoEvents,

    /// An event's availability yields no candidate slot at all.
    #[error("no feasible slot for event '{0}'")]
    NoFeasibleSlot(String),

    /// A candidate slot was scored against an event that is not
    /// available for the whole slot.
    #[error("candidate slot is outside the availability of event '{0}'")]
    SlotOutsideAvailability(String),

    /// Interval construction or algebra failed.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// An event referred to a name missing from the roster.
    #[error(transparent)]
    Roster(#[from] RosterError),
}

//! Weekly event scheduling.
//!
//! Assigns a fixed list of recurring events — each tied to a group of
//! people, a location, a duration, and a priority — to non-conflicting
//! slots within a weekly time universe, maximizing future placement
//! flexibility at every step.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSet` (the interval-set algebra),
//!   `Person`, `Group`, `Location`, `EventRequest`, `ScheduledEvent`,
//!   `Roster`, `Timetable`
//! - **`scheduler`**: `GreedyScheduler` and its lookahead `OptionMetric`
//! - **`validation`**: Input integrity checks (duplicate names, dangling
//!   references, unusable durations)
//!
//! # Example
//!
//! ```
//! use weekplan::models::{EventRequest, Group, Location, Person, Roster, TimeSet};
//! use weekplan::scheduler::GreedyScheduler;
//!
//! let mut roster = Roster::new();
//! roster.add_person(Person::new("Ada", TimeSet::interval(9.0, 17.0).unwrap()));
//! roster.add_group(Group::of_members("Solo", ["Ada"]));
//! roster.add_location(Location::new("Room1"));
//!
//! let events = vec![EventRequest::new("Standup", "Solo", "Room1", 1.0)];
//! let timetable = GreedyScheduler::new(0.25)
//!     .schedule(events, &mut roster)
//!     .unwrap();
//! assert_eq!(timetable.len(), 1);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Dechter (2003), "Constraint Processing"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};

//! Greedy lookahead scheduling.
//!
//! Provides the option-maximizing greedy scheduler and its lookahead
//! scoring structure.
//!
//! # Algorithm
//!
//! `GreedyScheduler` places one event per iteration: the most urgent
//! pending event (priority, scarcity, duration, group size) goes into the
//! candidate slot that preserves the most placement options for everyone
//! else, as measured by an `OptionMetric`. It is a heuristic, not an
//! optimal solver: it never backtracks, and a placement that strands a
//! later event aborts the run.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Dechter (2003), "Constraint Processing", Ch. 5 (lookahead value
//!   ordering)

mod greedy;
mod metric;

pub use greedy::GreedyScheduler;
pub use metric::OptionMetric;

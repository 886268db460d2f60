//! Person model.
//!
//! A person carries two availabilities: the default one they were
//! constructed with, which never changes, and the current one, which
//! shrinks as committed events claim their time.

use serde::{Deserialize, Serialize};

use super::TimeSet;

/// A person whose time is being scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    default_availability: TimeSet,
    current_availability: TimeSet,
}

impl Person {
    /// Creates a person with the given name and starting availability.
    pub fn new(name: impl Into<String>, availability: TimeSet) -> Self {
        Self {
            name: name.into(),
            default_availability: availability.clone(),
            current_availability: availability,
        }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The availability this person was constructed with.
    pub fn default_availability(&self) -> &TimeSet {
        &self.default_availability
    }

    /// The person's remaining availability.
    pub fn current_availability(&self) -> &TimeSet {
        &self.current_availability
    }

    /// Replaces the current availability wholesale.
    pub fn set_current_availability(&mut self, availability: TimeSet) {
        self.current_availability = availability;
    }

    /// Restores the current availability to the default.
    pub fn reset(&mut self) {
        self.current_availability = self.default_availability.clone();
    }
}

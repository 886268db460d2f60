//! Roster: the shared-state container for a scheduling run.
//!
//! People, groups, and locations are registered by name; events refer to
//! them by name only. All availability mutation during scheduling goes
//! through the roster, which keeps the side effects of committing an
//! event explicit and in one place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::{Group, Location, Person};

/// A name that could not be resolved against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No person registered under this name.
    #[error("unknown person '{0}'")]
    UnknownPerson(String),
    /// No group registered under this name.
    #[error("unknown group '{0}'")]
    UnknownGroup(String),
    /// No location registered under this name.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
}

/// Named registries for the domain records of one scheduling run.
///
/// Registering a record under an already-used name replaces the previous
/// record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    people: HashMap<String, Person>,
    groups: HashMap<String, Group>,
    locations: HashMap<String, Location>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person.
    pub fn add_person(&mut self, person: Person) -> &mut Self {
        self.people.insert(person.name().to_owned(), person);
        self
    }

    /// Registers a group.
    pub fn add_group(&mut self, group: Group) -> &mut Self {
        self.groups.insert(group.name().to_owned(), group);
        self
    }

    /// Registers a location.
    pub fn add_location(&mut self, location: Location) -> &mut Self {
        self.locations.insert(location.name().to_owned(), location);
        self
    }

    /// Looks up a person by name.
    pub fn person(&self, name: &str) -> Result<&Person, RosterError> {
        self.people
            .get(name)
            .ok_or_else(|| RosterError::UnknownPerson(name.to_owned()))
    }

    /// Looks up a person for mutation.
    pub fn person_mut(&mut self, name: &str) -> Result<&mut Person, RosterError> {
        self.people
            .get_mut(name)
            .ok_or_else(|| RosterError::UnknownPerson(name.to_owned()))
    }

    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Result<&Group, RosterError> {
        self.groups
            .get(name)
            .ok_or_else(|| RosterError::UnknownGroup(name.to_owned()))
    }

    /// Looks up a location by name.
    pub fn location(&self, name: &str) -> Result<&Location, RosterError> {
        self.locations
            .get(name)
            .ok_or_else(|| RosterError::UnknownLocation(name.to_owned()))
    }

    /// Looks up a location for mutation.
    pub fn location_mut(&mut self, name: &str) -> Result<&mut Location, RosterError> {
        self.locations
            .get_mut(name)
            .ok_or_else(|| RosterError::UnknownLocation(name.to_owned()))
    }

    /// Whether a person is registered under this name.
    pub fn has_person(&self, name: &str) -> bool {
        self.people.contains_key(name)
    }

    /// Whether a group is registered under this name.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Whether a location is registered under this name.
    pub fn has_location(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Iterates all registered people.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterates all registered groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Iterates all registered locations.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

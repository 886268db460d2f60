//! Group model.
//!
//! A group is a named, weighted collection of people. Weights are not yet
//! consulted by scheduling decisions; they are carried for future ranking
//! policies. Members are stored by name and resolved through a
//! [`Roster`](super::Roster) when availability is computed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Roster, RosterError, TimeSet};

/// Default member weight. Twelve has many divisors, so common weight
/// ratios stay integral when members are weighted relative to each other.
pub const DEFAULT_WEIGHT: i32 = 12;

/// A named group of people to schedule together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    // BTreeMap keeps member iteration deterministic.
    members: BTreeMap<String, i32>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    /// Creates a group containing the given people at the default weight.
    pub fn of_members<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(name);
        for member in members {
            group.members.insert(member.into(), DEFAULT_WEIGHT);
        }
        group
    }

    /// Adds a member at the default weight.
    pub fn with_member(mut self, person: impl Into<String>) -> Self {
        self.members.insert(person.into(), DEFAULT_WEIGHT);
        self
    }

    /// Adds a member at an explicit weight.
    pub fn with_weighted_member(mut self, person: impl Into<String>, weight: i32) -> Self {
        self.members.insert(person.into(), weight);
        self
    }

    /// The group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member names, in deterministic order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// The weight of a member, if present.
    pub fn weight_of(&self, person: &str) -> Option<i32> {
        self.members.get(person).copied()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `person` belongs to this group.
    pub fn has_member(&self, person: &str) -> bool {
        self.members.contains_key(person)
    }

    /// Names present in both this group and `other`.
    pub fn common_members_with<'a>(&'a self, other: &Group) -> Vec<&'a str> {
        self.members()
            .filter(|name| other.has_member(name))
            .collect()
    }

    /// Whether this group shares at least one member with `other`.
    pub fn shares_members_with(&self, other: &Group) -> bool {
        self.members().any(|name| other.has_member(name))
    }

    /// The times at which every member is currently available: the
    /// intersection of all members' current availabilities. An empty
    /// group has no common time at all.
    pub fn availability(&self, roster: &Roster) -> Result<TimeSet, RosterError> {
        let mut availabilities = Vec::with_capacity(self.members.len());
        for name in self.members.keys() {
            availabilities.push(roster.person(name)?.current_availability().clone());
        }
        match availabilities.split_first() {
            None => Ok(TimeSet::empty()),
            Some((first, rest)) => Ok(first.intersect_all(rest)),
        }
    }
}

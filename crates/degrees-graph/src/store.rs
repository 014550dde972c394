//! The entity store.
//!
//! Read-only lookup tables over people and works, plus a name index
//! for resolving display names to ids. The store is built once by
//! `StoreBuilder` and never mutated afterward.

use degrees_core::{Person, PersonId, Work, WorkId};
use serde::Serialize;
use std::collections::HashMap;

/// Lookup tables for one dataset.
///
/// All lookups are tolerant: a missing id yields `None` or an empty
/// result, never a panic. The membership invariant (a work id in a
/// person's set implies the person id in that work's cast, and vice
/// versa) is maintained by the builder for every linked credit.
#[derive(Debug)]
pub struct EntityStore {
    /// Maps person ids to people.
    pub(crate) people: HashMap<PersonId, Person>,

    /// Maps work ids to works.
    pub(crate) works: HashMap<WorkId, Work>,

    /// Maps lowercased names to person ids (for name resolution).
    pub(crate) name_index: HashMap<String, Vec<PersonId>>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            people: HashMap::new(),
            works: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Gets a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Gets a work by id.
    pub fn work(&self, id: &str) -> Option<&Work> {
        self.works.get(id)
    }

    /// Returns true when a person with this id exists.
    pub fn contains_person(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    /// Finds all people with a given name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Vec<&Person> {
        self.name_index
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().filter_map(|id| self.people.get(id)).collect())
            .unwrap_or_default()
    }

    /// Iterates over all people.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Returns the number of people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the number of works.
    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// Returns the number of linked person-work memberships.
    pub fn membership_count(&self) -> usize {
        self.works.values().map(|work| work.cast.len()).sum()
    }

    /// Adds a person and indexes their name. Used by the builder.
    pub(crate) fn insert_person(&mut self, person: Person) {
        self.name_index
            .entry(person.name.to_lowercase())
            .or_default()
            .push(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    /// Adds a work. Used by the builder.
    pub(crate) fn insert_work(&mut self, work: Work) {
        self.works.insert(work.id.clone(), work);
    }
}

/// Store statistics for status output.
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub people: usize,
    pub works: usize,
    pub memberships: usize,
}

impl EntityStore {
    /// Returns store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            people: self.person_count(),
            works: self.work_count(),
            memberships: self.membership_count(),
        }
    }
}

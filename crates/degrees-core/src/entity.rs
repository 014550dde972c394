//! Entity types for the people/works graph.
//!
//! A `Person` and a `Work` each carry the id set of the other side, so
//! a membership is recorded on both ends of the relation. The store
//! builder is responsible for keeping the two sides in sync.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Unique identifier for a person.
pub type PersonId = String;

/// Unique identifier for a work.
pub type WorkId = String;

/// A person in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique id, stable across the dataset.
    pub id: PersonId,

    /// Display name. Not unique; the store keeps a name index for
    /// resolving names to ids.
    pub name: String,

    /// Birth year, when the dataset records one.
    pub birth: Option<u16>,

    /// Ids of the works this person is credited in.
    pub works: HashSet<WorkId>,
}

impl Person {
    /// Creates a person with no credited works yet.
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<u16>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth,
            works: HashSet::new(),
        }
    }
}

/// A work (film, production, publication) in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    /// Unique id, stable across the dataset.
    pub id: WorkId,

    /// Display title.
    pub title: String,

    /// Release year, when the dataset records one.
    pub year: Option<u16>,

    /// Ids of the people credited in this work.
    pub cast: HashSet<PersonId>,
}

impl Work {
    /// Creates a work with an empty cast.
    pub fn new(id: impl Into<WorkId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            cast: HashSet::new(),
        }
    }
}

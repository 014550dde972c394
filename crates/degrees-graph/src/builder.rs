//! Store builder for assembling the entity store from raw records.
//!
//! Two passes, matching the dataset files themselves: register every
//! person and work first, then link credits. A credit naming an
//! unknown person or work is skipped and counted, never an error.

use crate::store::EntityStore;
use degrees_core::{Dataset, Person, PersonRecord, Work, WorkRecord};
use tracing::debug;

/// Builds an `EntityStore` from dataset records.
pub struct StoreBuilder {
    store: EntityStore,
    dangling_credits: usize,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
            dangling_credits: 0,
        }
    }

    /// Registers a person.
    pub fn add_person(&mut self, record: PersonRecord) {
        self.store
            .insert_person(Person::new(record.id, record.name, record.birth));
    }

    /// Registers a work.
    pub fn add_work(&mut self, record: WorkRecord) {
        self.store
            .insert_work(Work::new(record.id, record.title, record.year));
    }

    /// Links a credit on both sides of the membership relation.
    ///
    /// Returns false and counts the credit as dangling when either id
    /// is unknown; the membership sets stay untouched in that case.
    pub fn add_credit(&mut self, person_id: &str, work_id: &str) -> bool {
        if !self.store.people.contains_key(person_id) || !self.store.works.contains_key(work_id) {
            debug!("skipping credit {} -> {}: unknown id", person_id, work_id);
            self.dangling_credits += 1;
            return false;
        }

        if let Some(person) = self.store.people.get_mut(person_id) {
            person.works.insert(work_id.to_string());
        }
        if let Some(work) = self.store.works.get_mut(work_id) {
            work.cast.insert(person_id.to_string());
        }
        true
    }

    /// Feeds a whole dataset through the two passes.
    pub fn add_dataset(&mut self, dataset: Dataset) {
        for person in dataset.people {
            self.add_person(person);
        }
        for work in dataset.works {
            self.add_work(work);
        }
        for credit in dataset.credits {
            self.add_credit(&credit.person_id, &credit.work_id);
        }
    }

    /// Number of credits skipped because they named unknown ids.
    pub fn dangling_credits(&self) -> usize {
        self.dangling_credits
    }

    /// Finishes building and returns the store.
    pub fn build(self) -> EntityStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name: name.to_string(),
            birth: None,
        }
    }

    fn work(id: &str, title: &str) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            title: title.to_string(),
            year: None,
        }
    }

    #[test]
    fn test_credit_links_both_sides() {
        let mut builder = StoreBuilder::new();
        builder.add_person(person("p1", "Ana"));
        builder.add_work(work("w1", "Doc"));

        assert!(builder.add_credit("p1", "w1"));
        let store = builder.build();

        assert!(store.person("p1").unwrap().works.contains("w1"));
        assert!(store.work("w1").unwrap().cast.contains("p1"));
        assert_eq!(store.membership_count(), 1);
    }

    #[test]
    fn test_dangling_credit_is_skipped_and_counted() {
        let mut builder = StoreBuilder::new();
        builder.add_person(person("p1", "Ana"));
        builder.add_work(work("w1", "Doc"));

        assert!(!builder.add_credit("p1", "ghost"));
        assert!(!builder.add_credit("ghost", "w1"));
        assert_eq!(builder.dangling_credits(), 2);

        let store = builder.build();
        assert!(store.person("p1").unwrap().works.is_empty());
        assert!(store.work("w1").unwrap().cast.is_empty());
    }

    #[test]
    fn test_duplicate_credit_links_once() {
        let mut builder = StoreBuilder::new();
        builder.add_person(person("p1", "Ana"));
        builder.add_work(work("w1", "Doc"));

        builder.add_credit("p1", "w1");
        builder.add_credit("p1", "w1");

        let store = builder.build();
        assert_eq!(store.membership_count(), 1);
    }
}

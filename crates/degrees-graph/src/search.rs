//! Shortest-connection search.
//!
//! Breadth-first search over the implicit graph whose vertices are
//! people and whose edges are shared work credits. BFS explores every
//! person at distance k before any person at distance k+1, so the
//! first time the target comes off the frontier it is at minimum
//! distance, and the recorded provenance reconstructs one shortest
//! path.

use crate::store::EntityStore;
use degrees_core::{PersonId, WorkId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, VecDeque};
use tracing::debug;

/// One hop on a connection path: the `work` shared with the previous
/// person on the path, and the `person` it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub work: WorkId,
    pub person: PersonId,
}

/// How each discovered person was first reached: the connecting work
/// and the predecessor person. The source maps to `None`.
type Provenance = HashMap<PersonId, Option<(WorkId, PersonId)>>;

impl EntityStore {
    /// Returns the distinct `(work, co-participant)` pairs reachable
    /// from `person` through shared credits.
    ///
    /// The input person never appears as a co-participant. Dangling
    /// references (a credited work missing from the store, or a cast
    /// member missing from the people table) are silently skipped, as
    /// is an unknown input id. Two people sharing several works yield
    /// one pair per shared work.
    ///
    /// The result is ordered, which keeps the search deterministic
    /// when several equally short connections exist.
    pub fn neighbors_of(&self, person: &str) -> BTreeSet<(WorkId, PersonId)> {
        let mut neighbors = BTreeSet::new();
        let Some(subject) = self.person(person) else {
            return neighbors;
        };

        for work_id in &subject.works {
            let Some(work) = self.work(work_id) else {
                continue;
            };
            for member in &work.cast {
                if member != person && self.contains_person(member) {
                    neighbors.insert((work_id.clone(), member.clone()));
                }
            }
        }
        neighbors
    }

    /// Finds a shortest connection from `source` to `target`.
    ///
    /// Returns the connecting steps in source-to-target order, the
    /// empty path when `source == target`, and `None` when the two are
    /// not connected at all. Ids absent from the store simply have no
    /// neighbors and report "not connected".
    ///
    /// The goal test runs at dequeue time, after a person comes off
    /// the frontier. Each BFS layer is fully enqueued before the next
    /// one is expanded, so this finds the same path length as testing
    /// at enqueue time would.
    pub fn shortest_path(&self, source: &str, target: &str) -> Option<Vec<PathStep>> {
        let mut frontier: VecDeque<PersonId> = VecDeque::new();
        let mut came_from = Provenance::new();

        frontier.push_back(source.to_string());
        came_from.insert(source.to_string(), None);

        while let Some(current) = frontier.pop_front() {
            if current == target {
                let path = reconstruct(&came_from, &current);
                debug!(
                    "connected {} -> {} in {} steps ({} people explored)",
                    source,
                    target,
                    path.len(),
                    came_from.len()
                );
                return Some(path);
            }

            for (work, neighbor) in self.neighbors_of(&current) {
                if !came_from.contains_key(&neighbor) {
                    came_from.insert(neighbor.clone(), Some((work, current.clone())));
                    frontier.push_back(neighbor);
                }
            }
        }

        debug!(
            "no connection {} -> {} ({} people explored)",
            source,
            target,
            came_from.len()
        );
        None
    }
}

/// Walks the provenance backward from `target` to the source, then
/// reverses the collected steps into forward order.
fn reconstruct(came_from: &Provenance, target: &str) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current = target;

    while let Some(Some((work, predecessor))) = came_from.get(current) {
        path.push(PathStep {
            work: work.clone(),
            person: current.to_string(),
        });
        current = predecessor;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StoreBuilder;
    use degrees_core::{PersonRecord, WorkRecord};

    fn step(work: &str, person: &str) -> PathStep {
        PathStep {
            work: work.to_string(),
            person: person.to_string(),
        }
    }

    /// Builds a store from person ids and (work id, cast) pairs.
    fn make_store(people: &[&str], works: &[(&str, &[&str])]) -> EntityStore {
        let mut builder = StoreBuilder::new();
        for id in people {
            builder.add_person(PersonRecord {
                id: id.to_string(),
                name: format!("Person {}", id),
                birth: None,
            });
        }
        for (id, cast) in works {
            builder.add_work(WorkRecord {
                id: id.to_string(),
                title: format!("Work {}", id),
                year: None,
            });
            for member in *cast {
                builder.add_credit(member, id);
            }
        }
        builder.build()
    }

    /// The shared fixture: p1 and p2 in w1, p2 and p3 in w2, p4 isolated.
    fn fixture() -> EntityStore {
        make_store(
            &["p1", "p2", "p3", "p4"],
            &[("w1", &["p1", "p2"]), ("w2", &["p2", "p3"])],
        )
    }

    #[test]
    fn test_direct_connection() {
        let store = fixture();
        let path = store.shortest_path("p1", "p2").unwrap();
        assert_eq!(path, vec![step("w1", "p2")]);
    }

    #[test]
    fn test_two_degree_connection() {
        let store = fixture();
        let path = store.shortest_path("p1", "p3").unwrap();
        assert_eq!(path, vec![step("w1", "p2"), step("w2", "p3")]);
    }

    #[test]
    fn test_source_equals_target() {
        let store = fixture();
        let path = store.shortest_path("p2", "p2").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_not_connected() {
        let store = fixture();
        assert_eq!(store.shortest_path("p1", "p4"), None);
    }

    #[test]
    fn test_unknown_ids_report_not_connected() {
        let store = fixture();
        assert_eq!(store.shortest_path("ghost", "p1"), None);
        assert_eq!(store.shortest_path("p1", "ghost"), None);
    }

    #[test]
    fn test_prefers_shorter_route() {
        // a reaches c both directly (w3) and through b (w1, w2)
        let store = make_store(
            &["a", "b", "c"],
            &[
                ("w1", &["a", "b"]),
                ("w2", &["b", "c"]),
                ("w3", &["a", "c"]),
            ],
        );
        let path = store.shortest_path("a", "c").unwrap();
        assert_eq!(path, vec![step("w3", "c")]);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let store = make_store(
            &["a", "b", "c", "d"],
            &[
                ("w1", &["a", "b"]),
                ("w2", &["b", "c"]),
                ("w3", &["c", "d"]),
            ],
        );
        let forward = store.shortest_path("a", "d").unwrap();
        let backward = store.shortest_path("d", "a").unwrap();
        assert_eq!(forward.len(), 3);
        assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn test_search_is_repeatable() {
        let store = make_store(
            &["a", "b", "c", "d"],
            &[
                ("w1", &["a", "b"]),
                ("w2", &["a", "c"]),
                ("w3", &["b", "d"]),
                ("w4", &["c", "d"]),
            ],
        );
        // Two equally short routes exist; repeated searches must agree.
        let first = store.shortest_path("a", "d");
        let second = store.shortest_path("a", "d");
        assert_eq!(first, second);
        assert_eq!(first.unwrap().len(), 2);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let store = fixture();
        let neighbors = store.neighbors_of("p2");
        assert!(neighbors.iter().all(|(_, person)| person != "p2"));
        assert_eq!(
            neighbors.into_iter().collect::<Vec<_>>(),
            vec![
                ("w1".to_string(), "p1".to_string()),
                ("w2".to_string(), "p3".to_string()),
            ]
        );
    }

    #[test]
    fn test_neighbors_one_pair_per_shared_work() {
        let store = make_store(&["a", "b"], &[("w1", &["a", "b"]), ("w2", &["a", "b"])]);
        let neighbors = store.neighbors_of("a");
        assert_eq!(neighbors.len(), 2);
    }

    #[test]
    fn test_neighbors_skip_dangling_references() {
        let mut store = fixture();
        // A credited work that is missing from the works table
        store
            .people
            .get_mut("p1")
            .unwrap()
            .works
            .insert("ghost_work".to_string());
        // A cast member that is missing from the people table
        store
            .works
            .get_mut("w1")
            .unwrap()
            .cast
            .insert("ghost_person".to_string());

        let neighbors = store.neighbors_of("p1");
        assert_eq!(
            neighbors.into_iter().collect::<Vec<_>>(),
            vec![("w1".to_string(), "p2".to_string())]
        );
    }

    #[test]
    fn test_neighbors_of_unknown_person_is_empty() {
        let store = fixture();
        assert!(store.neighbors_of("ghost").is_empty());
    }

    #[test]
    fn test_path_survives_dangling_references() {
        let mut store = fixture();
        store
            .works
            .get_mut("w2")
            .unwrap()
            .cast
            .insert("ghost_person".to_string());

        let path = store.shortest_path("p1", "p3").unwrap();
        assert_eq!(path.len(), 2);
    }
}

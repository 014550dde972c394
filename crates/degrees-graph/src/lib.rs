//! Degrees Graph - entity store and connection search
//!
//! This crate holds the searchable form of a dataset and the search
//! itself. People and works form an implicit bipartite graph: two
//! people are adjacent when they share a credit in at least one work.
//! Nothing materializes that graph as an edge list; the search walks
//! the membership sets directly.
//!
//! # Architecture
//!
//! - [`StoreBuilder`] assembles an [`EntityStore`] from raw records in
//!   two passes: register every person and work, then link credits.
//! - [`EntityStore`] is immutable once built. Searches keep all of
//!   their state local, so a built store can be shared freely across
//!   concurrent searches.
//!
//! # Example
//!
//! ```
//! use degrees_core::{PersonRecord, WorkRecord};
//! use degrees_graph::StoreBuilder;
//!
//! let mut builder = StoreBuilder::new();
//! builder.add_person(PersonRecord { id: "p1".into(), name: "Ana".into(), birth: None });
//! builder.add_person(PersonRecord { id: "p2".into(), name: "Ben".into(), birth: None });
//! builder.add_work(WorkRecord { id: "w1".into(), title: "Doc".into(), year: None });
//! builder.add_credit("p1", "w1");
//! builder.add_credit("p2", "w1");
//! let store = builder.build();
//!
//! let path = store.shortest_path("p1", "p2").unwrap();
//! assert_eq!(path.len(), 1);
//! ```

mod builder;
mod search;
mod store;

pub use builder::StoreBuilder;
pub use search::PathStep;
pub use store::{EntityStore, StoreStats};

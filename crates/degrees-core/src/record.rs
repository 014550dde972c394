//! Raw CSV record types.
//!
//! These mirror the dataset files column-for-column. Conversion into
//! `Person`/`Work` values and the linking of credits happen in the
//! store builder, not here.

use serde::Deserialize;

/// One row of `people.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    /// Empty in the file deserializes to `None`.
    pub birth: Option<u16>,
}

/// One row of `works.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkRecord {
    pub id: String,
    pub title: String,
    /// Empty in the file deserializes to `None`.
    pub year: Option<u16>,
}

/// One row of `credits.csv`, linking a person to a work.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRecord {
    pub person_id: String,
    pub work_id: String,
}

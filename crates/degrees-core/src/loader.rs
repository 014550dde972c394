//! Dataset reader.
//!
//! Reads the three CSV files of a dataset directory into raw records.
//! Every file carries a header row; fields map onto the record structs
//! by column name via serde.

use crate::error::{DataError, Result};
use crate::record::{CreditRecord, PersonRecord, WorkRecord};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// File names expected inside a dataset directory.
const PEOPLE_FILE: &str = "people.csv";
const WORKS_FILE: &str = "works.csv";
const CREDITS_FILE: &str = "credits.csv";

/// All records of one dataset directory.
#[derive(Debug, Default)]
pub struct Dataset {
    pub people: Vec<PersonRecord>,
    pub works: Vec<WorkRecord>,
    pub credits: Vec<CreditRecord>,
}

/// Reads `people.csv`, `works.csv`, and `credits.csv` from `dir`.
///
/// Missing files and rows that don't match the expected columns are
/// errors. Consistency between the files is not checked here: credits
/// naming unknown ids are tolerated and counted by the store builder.
pub fn read_dataset(dir: &Path) -> Result<Dataset> {
    let people = read_records(&dir.join(PEOPLE_FILE))?;
    let works = read_records(&dir.join(WORKS_FILE))?;
    let credits = read_records(&dir.join(CREDITS_FILE))?;

    debug!(
        "read {} people, {} works, {} credits from {}",
        people.len(),
        works.len(),
        credits.len(),
        dir.display()
    );

    Ok(Dataset {
        people,
        works,
        credits,
    })
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(records)
}

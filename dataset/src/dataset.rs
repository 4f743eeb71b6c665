//! FILENAME: dataset/src/dataset.rs
//! The dataset handle: an immutable, validated collection of records.
//!
//! The loading collaborator (CSV reader, NOC-code resolver) builds the row
//! vector once and hands it to `Dataset::new`; from then on the dataset is
//! read-only for the lifetime of the process. Every query function receives
//! the handle explicitly — there is no ambient/global dataset — so queries
//! stay independently testable and have no ordering dependency on each other.

use std::collections::BTreeSet;

use crate::error::DatasetError;
use crate::record::Record;

/// The read-only record set every query operates over.
///
/// Construction validates each row and rejects malformed input; once built,
/// records are never created, mutated or destroyed. Derived views are
/// recomputed per query, never cached here.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validates and wraps a record vector.
    ///
    /// A record is malformed when its `year` is not positive, its athlete
    /// name is blank, or an optional measurement (`age`, `height`, `weight`)
    /// is present but non-finite or non-positive. The row index of the first
    /// offending record is reported.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        for (row, record) in records.iter().enumerate() {
            validate_record(row, record)?;
        }
        Ok(Dataset { records })
    }

    /// All records, in original load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct Games years, ascending. Used by the UI collaborator to
    /// populate the year filter.
    pub fn years(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        set.into_iter().collect()
    }

    /// Distinct resolved country names, ascending. Unmapped (null) regions
    /// are dropped, never listed as a category.
    pub fn regions(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.region.as_deref())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct sport names, ascending.
    pub fn sports(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.sport.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }
}

fn validate_record(row: usize, record: &Record) -> Result<(), DatasetError> {
    if record.year <= 0 {
        return Err(DatasetError::MalformedRecord {
            row,
            reason: format!("year {} is not a positive integer", record.year),
        });
    }
    if record.athlete.trim().is_empty() {
        return Err(DatasetError::MalformedRecord {
            row,
            reason: "athlete name is blank".to_string(),
        });
    }
    for (field, value) in [
        ("age", record.age),
        ("height", record.height),
        ("weight", record.weight),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(DatasetError::MalformedRecord {
                    row,
                    reason: format!("{} {} is not a positive finite number", field, v),
                });
            }
        }
    }
    Ok(())
}

//! FILENAME: dataset/src/error.rs

use thiserror::Error;

/// Input-contract violations caught when a dataset is constructed.
///
/// The query layer itself never fails: empty filtered sets, unmapped
/// countries and years with no data all resolve to well-formed empty tables.
/// Bad input rows are the one thing rejected up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },
}

//! FILENAME: dataset/src/lib.rs
//! PURPOSE: Main library entry point for the Olympics record dataset.
//! CONTEXT: Re-exports the record model, the dataset handle and the boundary
//! error type for use by the analytics crate and the loading collaborator.

pub mod dataset;
pub mod error;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::{Medal, Record, Sex};

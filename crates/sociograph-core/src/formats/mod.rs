//! Staged record file formats.
//!
//! The on-disk staging layout belongs to the scraping collaborators; this
//! module only knows how to read their record files into the in-memory
//! sequences the ingestion pipeline consumes.

mod csv;

pub use csv::Csv;

//! CSV staging-record reader.
//!
//! Node files are single-column (`Name` header, one identifier per row).
//! Edge files are two-column (`Source,Destination` header). Both shapes
//! match what the scraping stage writes.

use crate::{Error, NodeKind, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV record reader.
pub struct Csv;

impl Csv {
    /// Read node records, tagging every identifier with `kind`.
    pub fn read_node_records<R: Read>(reader: R, kind: NodeKind) -> Result<Vec<(String, NodeKind)>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let Some(id) = record.get(0) else {
                continue;
            };
            let id = id.trim();
            if !id.is_empty() {
                records.push((id.to_string(), kind));
            }
        }
        Ok(records)
    }

    /// Read edge records as (source, destination) pairs.
    pub fn read_edge_records<R: Read>(reader: R) -> Result<Vec<(String, String)>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let (Some(source), Some(destination)) = (record.get(0), record.get(1)) else {
                return Err(Error::InvalidRecord(format!(
                    "edge row needs two columns, got {:?}",
                    record
                )));
            };
            let source = source.trim();
            let destination = destination.trim();
            if source.is_empty() || destination.is_empty() {
                return Err(Error::InvalidRecord(format!(
                    "edge row has an empty endpoint: {:?}",
                    record
                )));
            }
            records.push((source.to_string(), destination.to_string()));
        }
        Ok(records)
    }

    /// Read node records from a file path.
    pub fn node_records_from_path(
        path: impl AsRef<Path>,
        kind: NodeKind,
    ) -> Result<Vec<(String, NodeKind)>> {
        Self::read_node_records(File::open(path)?, kind)
    }

    /// Read edge records from a file path.
    pub fn edge_records_from_path(path: impl AsRef<Path>) -> Result<Vec<(String, String)>> {
        Self::read_edge_records(File::open(path)?)
    }
}

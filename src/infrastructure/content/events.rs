//! Events listing backed by a `name,location,time` CSV file.
//!
//! The file is small and hand edited, so it is read whole on each request and
//! decoded with arrow-csv against a fixed all-string schema.

use super::error::map_io;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{EventRecord, EventSource};
use arrow_array::{Array, RecordBatch, StringArray};
use arrow_csv::ReaderBuilder;
use arrow_schema::{ArrowError, DataType, Field, Schema, SchemaRef};
use async_trait::async_trait;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

const COLUMNS: [&str; 3] = ["name", "location", "time"];

#[derive(Debug, Clone)]
pub struct CsvEventSource {
    path: PathBuf,
}

impl CsvEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for CsvEventSource {
    async fn upcoming_events(&self) -> DomainResult<Vec<EventRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| map_io(&self.path, &err))?;
        parse_events(&bytes)
    }
}

fn event_schema() -> SchemaRef {
    Arc::new(Schema::new(
        COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ))
}

fn malformed(err: &ArrowError) -> DomainError {
    DomainError::Malformed(format!("events csv: {err}"))
}

/// Decode CSV bytes, skipping the header row.
pub fn parse_events(bytes: &[u8]) -> DomainResult<Vec<EventRecord>> {
    let reader = ReaderBuilder::new(event_schema())
        .with_header(true)
        .build(Cursor::new(bytes))
        .map_err(|err| malformed(&err))?;

    let mut events = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|err| malformed(&err))?;
        let name = string_column(&batch, 0)?;
        let location = string_column(&batch, 1)?;
        let time = string_column(&batch, 2)?;

        for row in 0..batch.num_rows() {
            events.push(EventRecord::new(
                cell(name, row),
                cell(location, row),
                cell(time, row),
            ));
        }
    }

    Ok(events)
}

fn string_column(batch: &RecordBatch, index: usize) -> DomainResult<&StringArray> {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            DomainError::Malformed(format!("events csv: column {} is not text", COLUMNS[index]))
        })
}

// Empty cells decode as null.
fn cell(column: &StringArray, row: usize) -> String {
    if column.is_null(row) {
        String::new()
    } else {
        column.value(row).to_owned()
    }
}

//! The `consumer` module processes batches of delivered records.
//!
//! Each invocation is stateless and independent: it walks the batch in
//! delivered order, decodes every record body as JSON, extracts the
//! `Subject` and `Message` fields, and reports them to the event sink.
//! Empty batches and empty bodies are valid no-ops.


use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sink::EventSink;
use crate::utils::error::RelayError;
use crate::utils::response::Response;

/// One delivered unit within a batch, carrying the raw body string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub body: String,
}

/// Ordered sequence of records delivered in one invocation.
///
/// May be empty; order within the batch is transport-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub records: Vec<Record>,
}

/// Record outcome counts for one consumer invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Entry point for one consumer invocation.
pub fn handle(batch: &Batch, sink: &dyn EventSink) -> Response {
    if batch.records.is_empty() {
        sink.info("no records to process");
        return Response::ok("No records to process");
    }

    let summary = process(batch, sink);
    sink.info(&format!(
        "processed {} records ({} skipped, {} failed)",
        summary.processed, summary.skipped, summary.failed
    ));

    Response::ok("Processed records successfully")
}

/// Walks the batch in delivered order and reports each record's fields.
///
/// Empty bodies are skipped and malformed bodies are counted as failed;
/// neither stops the remaining records from being processed. Absent
/// `Subject`/`Message` fields read as empty strings and never fail a record.
pub fn process(batch: &Batch, sink: &dyn EventSink) -> Summary {
    let mut summary = Summary::default();
    sink.info(&format!("received {} records", batch.records.len()));

    for (position, record) in batch.records.iter().enumerate() {
        if record.body.is_empty() {
            sink.info(&format!("skipping record {position}: body is empty"));
            summary.skipped += 1;
            continue;
        }

        let body: Value = match serde_json::from_str(&record.body) {
            Ok(value) => value,
            Err(err) => {
                let err = RelayError::Decode(err);
                sink.error(&format!("record {position}: {err}"));
                summary.failed += 1;
                continue;
            }
        };

        let subject = body.get("Subject").and_then(Value::as_str).unwrap_or("");
        let message = body.get("Message").and_then(Value::as_str).unwrap_or("");
        sink.info(&format!("Subject={subject}, Message={message}"));
        summary.processed += 1;
    }

    summary
}

use crate::workflows::ghost_jobs::JobRecord;
use serde_json::Value;
use tracing::warn;

use super::IntakeError;

pub(crate) struct ParsedBatch {
    pub(crate) jobs: Vec<JobRecord>,
    pub(crate) skipped: Vec<usize>,
}

/// Accepts a bare array of job objects or an object wrapping it under `jobs`.
pub(crate) fn parse_document(document: Value) -> Result<ParsedBatch, IntakeError> {
    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(IntakeError::NotAnArray),
        },
        _ => return Err(IntakeError::NotAnArray),
    };

    let mut jobs = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!(index, "skipping job entry that is not an object");
            skipped.push(index);
            continue;
        }

        match serde_json::from_value::<JobRecord>(entry) {
            Ok(job) => jobs.push(job),
            Err(err) => {
                warn!(index, error = %err, "skipping undecodable job entry");
                skipped.push(index);
            }
        }
    }

    Ok(ParsedBatch { jobs, skipped })
}

//! Resilient JSONL reading.
//!
//! Reads a JSONL file line by line, deserializing each non-blank line and
//! collecting a [`Warning`] for every line that cannot be parsed instead of
//! failing the whole load.

use crate::error::Result;
use crate::warning::Warning;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read all records from a JSONL file, skipping unusable lines.
///
/// Blank lines are skipped silently. Lines that fail to parse as `T` are
/// skipped with a [`Warning::MalformedJson`] carrying the 1-based line
/// number, so one corrupt record never poisons the rest of the file.
///
/// # Errors
///
/// Returns an error only when the file itself cannot be opened or read.
/// Per-line parse failures are reported through the warning list.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).await?;
    let mut lines = BufReader::new(file).lines();

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(parse_err) => {
                tracing::debug!(line_number, error = %parse_err, "skipping malformed JSONL line");
                warnings.push(Warning::MalformedJson {
                    line_number,
                    error: parse_err.to_string(),
                });
            }
        }
    }

    Ok((records, warnings))
}

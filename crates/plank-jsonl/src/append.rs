//! Appending records to a JSONL file.
//!
//! Plank's annotation log is append-only: records are added one at a time
//! and never rewritten. This module provides that single primitive.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Serialize one record and append it to a JSONL file.
///
/// The file is created if it does not exist. The record is written as a
/// single line followed by a newline, and the write is flushed before
/// returning so a subsequent read observes it.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the record serializes to text
/// containing a newline (which would corrupt the line-oriented file),
/// [`Error::Json`] if serialization fails, and [`Error::Io`] for file
/// system failures.
pub async fn append_jsonl<T, P>(path: P, record: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_string(record)?;
    if json.contains('\n') {
        return Err(Error::InvalidFormat(
            "serialized record contains a newline".to_string(),
        ));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .await?;

    file.write_all(json.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;

    Ok(())
}

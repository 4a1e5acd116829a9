//! Local annotation store.
//!
//! Annotations are user-authored comments that live only on this machine,
//! persisted as an append-only JSONL file under `.plank/`. They are merged
//! into the issue detail view and never affect classification or the
//! remote tracker. Records are never edited or deleted, so the file is
//! only ever appended to.

use crate::domain::{Annotation, AnnotationId, IssueId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use plank_jsonl::{append_jsonl, read_jsonl_resilient, Warning};
use std::path::{Path, PathBuf};

/// Generator for unique, monotonic annotation ids.
///
/// Ids are `{millis:013}-{seq:04}`: zero-padded so lexicographic order
/// equals generation order even when several ids land in the same
/// millisecond or the clock stands still.
#[derive(Debug, Default)]
struct IdGenerator {
    last_millis: i64,
    seq: u32,
}

impl IdGenerator {
    /// Seed the generator past an already-used id so new ids keep sorting
    /// after everything loaded from disk.
    fn seed_past(&mut self, id: &AnnotationId) {
        let mut parts = id.as_str().split('-');
        let Some(millis) = parts.next().and_then(|p| p.parse::<i64>().ok()) else {
            return;
        };
        let seq = parts.next().and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);

        if millis > self.last_millis {
            self.last_millis = millis;
            self.seq = seq;
        } else if millis == self.last_millis {
            self.seq = self.seq.max(seq);
        }
    }

    fn next(&mut self, now: DateTime<Utc>) -> AnnotationId {
        let millis = now.timestamp_millis();
        if millis > self.last_millis {
            self.last_millis = millis;
            self.seq = 0;
        } else {
            self.seq += 1;
        }
        AnnotationId::new(format!("{:013}-{:04}", self.last_millis, self.seq))
    }
}

/// Append-only store of local annotations, keyed by issue id via a linear
/// filter (no secondary index at this scale).
#[derive(Debug)]
pub struct AnnotationStore {
    path: PathBuf,
    annotations: Vec<Annotation>,
    id_generator: IdGenerator,
}

impl AnnotationStore {
    /// Load the store from `path`.
    ///
    /// A missing file is an empty store, not an error. Malformed lines are
    /// skipped and reported through the returned warnings.
    pub async fn load(path: impl AsRef<Path>) -> Result<(Self, Vec<Warning>)> {
        let path = path.as_ref().to_path_buf();

        let (annotations, warnings): (Vec<Annotation>, Vec<Warning>) = if path.exists() {
            read_jsonl_resilient(&path).await?
        } else {
            (Vec::new(), Vec::new())
        };

        let mut id_generator = IdGenerator::default();
        for annotation in &annotations {
            id_generator.seed_past(&annotation.id);
        }

        tracing::debug!(
            path = %path.display(),
            count = annotations.len(),
            skipped = warnings.len(),
            "annotation store loaded"
        );

        Ok((
            Self {
                path,
                annotations,
                id_generator,
            },
            warnings,
        ))
    }

    /// Path of the backing JSONL file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All annotations in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Annotations for one issue, in insertion order.
    #[must_use]
    pub fn for_issue(&self, issue_id: IssueId) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|annotation| annotation.issue_id == issue_id)
            .collect()
    }

    /// Submit a new annotation.
    ///
    /// Whitespace-only content is rejected before an annotation is
    /// constructed: no error, no state change, `Ok(None)`. Otherwise the
    /// annotation is appended to the file and returned.
    pub async fn submit(
        &mut self,
        issue_id: IssueId,
        author: &str,
        content: &str,
    ) -> Result<Option<Annotation>> {
        let content = content.trim();
        if content.is_empty() {
            tracing::debug!(%issue_id, "ignoring blank annotation submission");
            return Ok(None);
        }

        let annotation = Annotation {
            id: self.id_generator.next(Utc::now()),
            issue_id,
            content: content.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
        };

        append_jsonl(&self.path, &annotation).await?;
        self.annotations.push(annotation.clone());

        Ok(Some(annotation))
    }
}

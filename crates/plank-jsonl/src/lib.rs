//! JSONL (JSON Lines) persistence helpers for plank.
//!
//! This crate provides the two file operations plank's append-only stores
//! need: resilient line-by-line reading that survives malformed records, and
//! single-record appends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod append;
pub mod error;
pub mod read;
pub mod warning;

pub use append::append_jsonl;
pub use error::{Error, Result};
pub use read::read_jsonl_resilient;
pub use warning::Warning;

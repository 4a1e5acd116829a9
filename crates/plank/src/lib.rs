//! Plank - a terminal kanban board for GitHub issues.
//!
//! This crate provides both a CLI application and a library for viewing a
//! repository's issues as a three-column board (To Do / In Progress / Done),
//! moving cards locally, and attaching local-only annotations.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod annotations;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod commands;

// Application context and output rendering
pub mod app;
pub mod output;

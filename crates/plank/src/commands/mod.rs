//! Command implementations that do not need a loaded application context.

pub mod init;

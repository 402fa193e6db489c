//! Shared plumbing for the terminal binaries: config loading and log setup.

pub mod config;
pub mod logging;

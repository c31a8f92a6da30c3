//! CLI library components for the trial registry parser.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

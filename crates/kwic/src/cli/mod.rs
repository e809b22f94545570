//! CLI support for the `kwic` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

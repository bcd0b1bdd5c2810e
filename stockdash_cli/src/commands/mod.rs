//! CLI subcommand implementations.

pub mod history;
pub mod info;
pub mod render;
pub mod serve;

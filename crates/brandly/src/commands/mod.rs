//! Command dispatch: bridges CLI args -> catalogue calls -> output formatting.

pub mod brands;
pub mod config_cmd;

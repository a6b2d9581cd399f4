//! CLI Integration Test Modules

pub mod queue_flags;
pub mod toml_config;

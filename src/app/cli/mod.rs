//! CLI module containing argument parsing and configuration loading

pub mod args;
pub mod config;

pub use args::Args;
pub use config::{load_config, ConfigError, FileConfig, Settings};

#[cfg(test)]
mod tests;

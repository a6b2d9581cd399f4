//! Tests for the CLI module
//!
//! Argument parsing, configuration file loading and settings resolution.

//! Command-line arguments for the strqueue binary

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::validation::validate_positive_int;

// Values are queued in order of appearance, then optionally sorted and
// reversed, then drained from the head and printed one per line.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "strqueue")]
#[command(about = "Queue, sort and reverse lines of text")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = "Values are read from standard input, one per line, when none are given.")]
pub struct Args {
    /// Values to queue
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,

    /// Insert each value at the head instead of the tail
    #[arg(long = "head", action = ArgAction::SetTrue, conflicts_with = "tail")]
    pub head: bool,

    /// Insert each value at the tail (default, overrides the config file)
    #[arg(long = "tail", action = ArgAction::SetTrue)]
    pub tail: bool,

    /// Sort values into ascending byte order
    #[arg(short = 's', long = "sort", action = ArgAction::SetTrue, conflicts_with = "no_sort")]
    pub sort: bool,

    /// Do not sort, even when the config file asks for it
    #[arg(long = "no-sort", action = ArgAction::SetTrue)]
    pub no_sort: bool,

    /// Reverse the queue (after sorting, when both are given)
    #[arg(
        short = 'r',
        long = "reverse",
        action = ArgAction::SetTrue,
        conflicts_with = "no_reverse"
    )]
    pub reverse: bool,

    /// Do not reverse, even when the config file asks for it
    #[arg(long = "no-reverse", action = ArgAction::SetTrue)]
    pub no_reverse: bool,

    /// Truncate each printed value to at most BYTES bytes
    #[arg(short = 'm', long = "max-len", value_name = "BYTES", value_parser = parse_max_len)]
    pub max_len: Option<usize>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(
        short = 'o',
        long = "log-format",
        value_name = "FORMAT",
        value_parser = ["text", "ext", "json"]
    )]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,
}

// Each on/off flag pair yields `None` when neither flag is given, leaving
// the value to the config file or the built-in default.
impl Args {
    /// Head insertion from `--head` / `--tail`
    pub fn head_choice(&self) -> Option<bool> {
        choice(self.head, self.tail)
    }

    pub fn sort_choice(&self) -> Option<bool> {
        choice(self.sort, self.no_sort)
    }

    pub fn reverse_choice(&self) -> Option<bool> {
        choice(self.reverse, self.no_reverse)
    }

    /// Color preference; `None` leaves it to config or TTY detection
    pub fn color_choice(&self) -> Option<bool> {
        choice(self.color, self.no_color)
    }
}

fn choice(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_max_len(value: &str) -> Result<usize, String> {
    validate_positive_int(value).map_err(|e| e.to_string())
}

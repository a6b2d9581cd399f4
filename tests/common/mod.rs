//! Common test utilities and helpers

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use strqueue::queue::api::StringQueue;

/// Build a queue by inserting `values` at the tail
pub fn queue_of(values: &[&str]) -> StringQueue {
    let mut queue = StringQueue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

/// Owned snapshot of the queue in traversal order
pub fn values(queue: &StringQueue) -> Vec<String> {
    queue.iter().map(str::to_string).collect()
}

/// Run the strqueue binary with an isolated config directory
pub fn run_cli(config_home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    run_cli_bytes(config_home, args, stdin.map(str::as_bytes))
}

/// Like [`run_cli`], with raw bytes on standard input
pub fn run_cli_bytes(config_home: &Path, args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strqueue"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start strqueue binary");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input)
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for strqueue")
}

/// Standard output split into lines
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

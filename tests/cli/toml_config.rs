//! Configuration file handling through the binary

use crate::common::{run_cli, stdout_lines};
use std::fs;

#[test]
fn test_explicit_config_file_sets_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "sort = true\nreverse = true\n").unwrap();

    let output = run_cli(
        home.path(),
        &["--config-file", config.to_str().unwrap(), "b", "a", "c"],
        None,
    );

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["c", "b", "a"]);
}

#[test]
fn test_command_line_switches_off_config_sort() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "sort = true\nreverse = true\n").unwrap();

    let output = run_cli(
        home.path(),
        &["-c", config.to_str().unwrap(), "--no-sort", "b", "a", "c"],
        None,
    );

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["c", "a", "b"]);
}

#[test]
fn test_default_config_location_is_used() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("Strqueue");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("strqueue.toml"), "max_len = 2\n").unwrap();

    let output = run_cli(home.path(), &["abcdef"], None);

    // dirs::config_dir honours XDG_CONFIG_HOME on Linux only
    if cfg!(target_os = "linux") {
        assert_eq!(stdout_lines(&output), vec!["ab"]);
    }
    assert!(output.status.success());
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nope.toml");

    let output = run_cli(home.path(), &["--config-file", missing.to_str().unwrap(), "x"], None);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_value_fails() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "log_level = \"loud\"\n").unwrap();

    let output = run_cli(home.path(), &["-c", config.to_str().unwrap(), "x"], None);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loud"), "stderr: {}", stderr);
}

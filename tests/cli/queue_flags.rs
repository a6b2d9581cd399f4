//! Queue behaviour observed through the binary

use crate::common::{run_cli, run_cli_bytes, stdout_lines};

#[test]
fn test_positional_values_pass_through_in_order() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["banana", "apple", "cherry"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["banana", "apple", "cherry"]);
}

#[test]
fn test_sort_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["--sort", "banana", "apple", "cherry"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_head_and_reverse_flags() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["--head", "--reverse", "a", "b", "c"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["a", "b", "c"]);
}

#[test]
fn test_reads_stdin_when_no_values_given() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["-s"], Some("pear\nfig\nkiwi\n"));

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["fig", "kiwi", "pear"]);
}

#[test]
fn test_max_len_truncates_output() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["--max-len", "3", "0123456789"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["012"]);
}

#[test]
fn test_huge_max_len_does_not_abort() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["--max-len", "1000000000000", "hello"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["hello"]);
}

#[test]
fn test_invalid_utf8_on_stdin_is_decoded_lossily() {
    let home = tempfile::tempdir().unwrap();
    let input = b"zeta\nab\xffc\r\n";
    let output = run_cli_bytes(home.path(), &["--sort"], Some(input.as_slice()));

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["ab\u{FFFD}c", "zeta"]);
}

#[test]
fn test_invalid_max_len_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(home.path(), &["--max-len", "0", "value"], None);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_logging_goes_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(
        home.path(),
        &["--log-level", "info", "--log-format", "json", "--no-color", "x"],
        None,
    );

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["x"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"level\":\"INF\""), "stderr: {}", stderr);
}

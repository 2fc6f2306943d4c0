//! Runs the built `logstat` binary and checks its exit status and output.

use std::io::Write;
use std::process::Command;

use tempfile::{tempdir, NamedTempFile};

fn logstat(args: &[&str]) -> (Option<i32>, String, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_logstat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (
        out.status.code(),
        String::from_utf8(out.stdout).unwrap(),
        String::from_utf8(out.stderr).unwrap(),
    )
}

fn sample_log() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "a,b,5,c\na,b,5,c\na,b,6,c\na,b\n").unwrap();
    tmp
}

#[test]
fn plain_report() {
    let log = sample_log();
    let path = log.path().to_str().unwrap();
    assert_eq!(logstat(&[path]), (Some(0), "5,2\n6,1\n".to_string(), String::new()));
}

#[test]
fn basic_report() {
    let log = sample_log();
    let path = log.path().to_str().unwrap();
    let (code, stdout, _) = logstat(&[path, "BASIC"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "100 DATA 2,5\n101 DATA \"    5\",2\n102 DATA \"    6\",1\n");
}

#[test]
fn extra_arguments_still_succeed() {
    let log = sample_log();
    let path = log.path().to_str().unwrap();
    let (code, stdout, _) = logstat(&[path, "BASIC", "extra"]);
    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("100 DATA 2,5\n"));
}

#[test]
fn unknown_mode_falls_back_to_plain() {
    let log = sample_log();
    let path = log.path().to_str().unwrap();
    for mode in ["-x", "basic", "--csv"] {
        let (code, stdout, _) = logstat(&[path, mode]);
        assert_eq!(code, Some(0), "mode {mode}");
        assert_eq!(stdout, "5,2\n6,1\n", "mode {mode}");
    }
}

#[test]
fn missing_file_is_empty_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("2048.log");
    let path = path.to_str().unwrap();
    assert_eq!(logstat(&[path]).0, Some(0));
    let (code, stdout, _) = logstat(&[path, "BASIC"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "100 DATA 0,5\n");
}

#[test]
fn missing_logfile_argument_exits_one() {
    let (code, stdout, stderr) = logstat(&[]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

//! Hashing strings, files and standard input through `run`.

use std::ffi::OsString;
use std::fs;
use std::io::Cursor;

use cli::{PROMPT, StdinMode, run};
use tempfile::tempdir;

const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const FOX: &str = "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592";

fn run_cli<I, S>(args: I, input: &[u8], mode: StdinMode) -> (i32, String, String)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdin = Cursor::new(input.to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdin, mode, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

#[test]
fn string_argument() {
    let (code, stdout, stderr) = run_cli(
        ["fips-sha256", "-s", "The quick brown fox jumps over the lazy dog"],
        b"",
        StdinMode::Piped,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("SHA-256: {FOX}\n"));
    assert!(stderr.is_empty());
}

#[test]
fn file_contents_are_hashed_raw() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("input.bin");
    fs::write(&path, b"hello\n").expect("write");

    let (code, stdout, _) = run_cli(
        [OsString::from("fips-sha256"), "--bare".into(), "-f".into(), path.into_os_string()],
        b"",
        StdinMode::Piped,
    );
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03\n"
    );
}

#[test]
fn large_file_is_streamed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("million-a.txt");
    fs::write(&path, vec![b'a'; 1_000_000]).expect("write");

    let (code, stdout, _) = run_cli(
        [OsString::from("fips-sha256"), "--bare".into(), "--file".into(), path.into_os_string()],
        b"",
        StdinMode::Piped,
    );
    assert_eq!(code, 0);
    assert_eq!(
        stdout.trim_end(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn empty_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty");
    fs::write(&path, b"").expect("write");

    let (code, stdout, _) = run_cli(
        [OsString::from("fips-sha256"), "-f".into(), path.into_os_string()],
        b"",
        StdinMode::Piped,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("SHA-256: {EMPTY}\n"));
}

#[test]
fn missing_file_exits_with_two() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.txt");
    let (code, stdout, stderr) = run_cli(
        [OsString::from("fips-sha256"), "-f".into(), path.into_os_string()],
        b"",
        StdinMode::Piped,
    );
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("fips-sha256 error: cannot read "), "{stderr}");
    assert!(stderr.contains("absent.txt"));
}

#[test]
fn interactive_prompt_hashes_one_line() {
    let (code, stdout, stderr) = run_cli(
        ["fips-sha256"],
        b"The quick brown fox jumps over the lazy dog\nsecond line\n",
        StdinMode::Interactive,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("SHA-256: {FOX}\n"));
    assert_eq!(stderr, PROMPT);
}

#[test]
fn piped_input_keeps_newlines() {
    let (code, stdout, stderr) = run_cli(["fips-sha256", "--bare"], b"", StdinMode::Piped);
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{EMPTY}\n"));
    assert!(stderr.is_empty());

    let (_, with_newline, _) = run_cli(["fips-sha256", "--bare"], b"abc\n", StdinMode::Piped);
    assert_ne!(with_newline.trim_end(), checksums::hash(b"abc"));
    assert_eq!(with_newline.trim_end(), checksums::hash(b"abc\n"));
}

#[test]
fn unknown_option_exits_with_one() {
    let (code, stdout, stderr) = run_cli(["fips-sha256", "--sha1"], b"", StdinMode::Piped);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--sha1"), "{stderr}");
}

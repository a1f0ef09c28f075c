//! Tests for mutually exclusive input sources.
//!
//! Only one of `--string`, `--file` and `--verify` may be given.

use cli::test_utils::parse_args;

#[test]
fn test_string_and_file_conflict() {
    let result = parse_args(["fips-sha256", "--string", "abc", "--file", "data.bin"]);
    assert!(
        result.is_err(),
        "--string and --file should be mutually exclusive"
    );
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_string_and_verify_conflict() {
    let result = parse_args(["fips-sha256", "-s", "abc", "--verify", "short.rsp"]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_file_and_verify_conflict() {
    let result = parse_args(["fips-sha256", "-f", "data.bin", "--verify", "short.rsp"]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_repeated_string_is_rejected() {
    let result = parse_args(["fips-sha256", "-s", "a", "-s", "b"]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_quiet_and_verbose_combine() {
    let parsed = parse_args(["fips-sha256", "-q", "-vvv", "-s", "abc"]).expect("parse");
    assert!(parsed.quiet);
    assert_eq!(parsed.verbose, 3);
}

#[test]
fn test_bare_with_each_source() {
    for args in [
        ["fips-sha256", "--bare", "-s", "abc"],
        ["fips-sha256", "--bare", "-f", "data.bin"],
    ] {
        let parsed = parse_args(args).expect("parse");
        assert!(parsed.bare);
    }
}

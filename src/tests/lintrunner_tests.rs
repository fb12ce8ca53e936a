// src/tests/lintrunner_tests.rs

//! tests for [`src/runner/lintrunner.rs`]
//!
//! The linter is stood in for by `/bin/sh -c` scripts.
//!
//! [`src/runner/lintrunner.rs`]: crate::runner::lintrunner

use std::io::{
    Error,
    ErrorKind,
    Result,
    Write,
};
use std::os::unix::process::ExitStatusExt; // adds `signal` to `ExitStatus`
use std::time::{
    Duration,
    Instant,
};

use ::test_case::test_case;

use crate::common::Bytes;
use crate::runner::lintrunner::{
    LintOutcome,
    LintRunner,
};

const SH: &str = "/bin/sh";

/// helper to run `script` with `sh -c`, returning the outcome and output
fn run_script(script: &str) -> (LintOutcome, Bytes) {
    let runner = LintRunner::new(SH, ["-c", script]);
    let mut output = Bytes::new();
    let outcome = match runner.run(&mut output) {
        Ok(val) => val,
        Err(err) => panic!("LintRunner::run() returned Err {}", err),
    };

    (outcome, output)
}

#[test]
fn test_lintrunner_scenario() {
    let script = r#"
printf '%s\n' 'foo.go:10:2: comment on exported function Bar should be of the form "Bar ..."'
printf '%s\n' 'internal/util.go:5:1: some arbitrary notice'
printf '%s\n' 'pkg/foo.go:3:4: unrelated stylistic notice text'
printf '%s\n' 'pkg/bar.go:1:1: const myConst should be myConst'
"#;
    let (outcome, output) = run_script(script);
    assert_eq!(outcome, LintOutcome::Exited(0));
    assert_eq!(output.as_slice(), b"pkg/foo.go:3:4: unrelated stylistic notice text\n");
}

#[test_case("exit 0", 0)]
#[test_case("exit 1", 1)]
#[test_case("exit 2", 2)]
#[test_case("exit 255", 255)]
#[test_case("printf '%s\\n' 'a.go:1:1: x'; exit 3", 3; "output then exit 3")]
fn test_lintrunner_exit_code(script: &str, expect: i32) {
    let (outcome, _output) = run_script(script);
    assert_eq!(outcome, LintOutcome::Exited(expect));
}

#[test]
fn test_lintrunner_exit_2_no_output() {
    let (outcome, output) = run_script("exit 2");
    assert_eq!(outcome, LintOutcome::Exited(2));
    assert!(output.is_empty());
}

#[test_case(&["-h", "--help", "a b", "", "./..."], b"-h\n--help\na b\n\n./...\n"; "hyphens spaces empty")]
#[test_case(&["--", "./..."], b"--\n./...\n"; "leading double dash")]
#[test_case(&["--", "--", "x"], b"--\n--\nx\n"; "double dash twice")]
fn test_lintrunner_args_verbatim(args: &[&str], expect: &[u8]) {
    // `$0` is the first argument after the script, the rest are `$@`
    let mut script_args: Vec<&str> = vec!["-c", r#"printf '%s\n' "$@""#, "sh"];
    script_args.extend_from_slice(args);
    let runner = LintRunner::new(SH, script_args);
    let mut output = Bytes::new();
    let outcome = runner.run(&mut output).unwrap();
    assert_eq!(outcome, LintOutcome::Exited(0));
    assert_eq!(output.as_slice(), expect);
}

#[test]
fn test_lintrunner_stderr_not_filtered() {
    // stderr is inherited so nothing written there reaches `output`
    let (outcome, output) =
        run_script("printf '%s\\n' 'internal/a.go:1:1: x' >&2; printf '%s\\n' 'a.go:1:1: y'");
    assert_eq!(outcome, LintOutcome::Exited(0));
    assert_eq!(output.as_slice(), b"a.go:1:1: y\n");
}

#[test]
fn test_lintrunner_signaled() {
    let (outcome, _output) = run_script("kill -9 $$");
    match outcome {
        LintOutcome::Abnormal(status) => {
            assert_eq!(status.code(), None);
            assert_eq!(status.signal(), Some(9));
        }
        LintOutcome::Exited(code) => panic!("expected Abnormal, got Exited({})", code),
    }
}

#[test]
fn test_lintrunner_not_found() {
    let runner = LintRunner::new("golint-filter-test-no-such-program", ["./..."]);
    let mut output = Bytes::new();
    let err = match runner.run(&mut output) {
        Ok(val) => panic!("LintRunner::run() returned Ok {:?}", val),
        Err(err) => err,
    };
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let s = err.to_string();
    assert!(s.contains("failed to start"), "{}", s);
    assert!(s.contains("golint-filter-test-no-such-program"), "{}", s);
    assert!(output.is_empty());
}

/// writer that always fails
struct FailingWriter {}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_lintrunner_write_error_kills_process() {
    // without the kill this would run for a long time
    let runner = LintRunner::new(SH, ["-c", "printf '%s\\n' 'a.go:1:1: x'; exec sleep 60"]);
    let start = Instant::now();
    let err = match runner.run(FailingWriter {}) {
        Ok(val) => panic!("LintRunner::run() returned Ok {:?}", val),
        Err(err) => err,
    };
    assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    assert!(start.elapsed() < Duration::from_secs(30), "elapsed {:?}", start.elapsed());
}

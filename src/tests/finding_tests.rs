// src/tests/finding_tests.rs

//! tests for [`src/data/finding.rs`]
//!
//! [`src/data/finding.rs`]: crate::data::finding

use ::test_case::test_case;

use crate::data::finding::Finding;

#[test_case(
    b"foo.go:10:2: comment on exported function Bar should be of the form \"Bar ...\"",
    b"foo.go",
    b"comment on exported function Bar should be of the form \"Bar ...\"";
    "comment on"
)]
#[test_case(
    b"internal/util.go:5:1: some arbitrary notice\n",
    b"internal/util.go",
    b"some arbitrary notice";
    "trailing newline"
)]
#[test_case(
    b"  \tpkg/foo.go:3:4: unrelated stylistic notice text \r\n",
    b"pkg/foo.go",
    b"unrelated stylistic notice text";
    "surrounding whitespace"
)]
#[test_case(
    b"pkg/foo.go:3:4:\t   spaced",
    b"pkg/foo.go",
    b"spaced";
    "many blanks"
)]
#[test_case(
    b"a:1:2:b.go:30:40: msg",
    b"a:1:2:b.go",
    b"msg";
    "greedy filename"
)]
#[test_case(
    b"pkg/foo.go:3:4: msg at x.go:1:2: inside",
    b"pkg/foo.go:3:4: msg at x.go",
    b"inside";
    "last line column pair wins"
)]
#[test_case(
    b"C:\\go\\src\\a.go:1:1: windows path",
    b"C:\\go\\src\\a.go",
    b"windows path";
    "windows path"
)]
#[test_case(
    b"p\xFFkg/a.go:7:8: bad \xFE bytes",
    b"p\xFFkg/a.go",
    b"bad \xFE bytes";
    "invalid utf8"
)]
#[test_case(
    b"pkg/foo.go:3:4: msg with 1:2: inside",
    b"pkg/foo.go",
    b"msg with 1:2: inside";
    "one number is not a line column pair"
)]
#[test_case(
    b":1:1: no filename",
    b"",
    b"no filename";
    "empty filename"
)]
fn test_finding_parse(line: &[u8], expect_filename: &[u8], expect_message: &[u8]) {
    let finding = match Finding::parse(line) {
        Some(val) => val,
        None => panic!("Finding::parse({:?}) returned None", line),
    };
    assert_eq!(finding.filename(), expect_filename, "filename");
    assert_eq!(finding.message(), expect_message, "message");
    assert_eq!(finding.line(), line, "line");
}

#[test_case(b""; "empty")]
#[test_case(b"\n"; "newline")]
#[test_case(b"   \n"; "blanks")]
#[test_case(b"no colons here"; "no colons")]
#[test_case(b"foo.go:10: missing column"; "missing column")]
#[test_case(b"foo.go:10:2:no blank"; "no blank")]
#[test_case(b"foo.go:10:2: "; "trimmed to no blank")]
#[test_case(b"foo.go:x:2: not a line number"; "line not number")]
#[test_case(b"foo.go:1:y: not a column number"; "column not number")]
#[test_case(b"Found 3 lint suggestions; failing.\n"; "golint set_exit_status")]
fn test_finding_parse_none(line: &[u8]) {
    assert_eq!(Finding::parse(line), None);
}

#[test]
fn test_finding_debug() {
    let finding = Finding::parse(b"a.go:1:2: msg\n").unwrap();
    let s = format!("{:?}", finding);
    assert!(s.contains("a.go"), "{}", s);
    assert!(s.contains("msg"), "{}", s);
}

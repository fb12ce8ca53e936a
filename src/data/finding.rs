// src/data/finding.rs

//! Implement [`Finding`], one diagnostic line printed by `golint`.
//!
//! [`Finding`]: crate::data::finding::Finding

use std::fmt;

use ::bstr::ByteSlice; // adds `trim` to `[u8]`
use ::const_format::concatcp;
use ::lazy_static::lazy_static;
use ::regex::bytes::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// finding regular expression
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// capture group name for the file path
pub const CGN_FILENAME: &str = "filename";
/// capture group name for the message text
pub const CGN_MESSAGE: &str = "message";

const CGP_FILENAME: &str = concatcp!("(?P<", CGN_FILENAME, r">.*)");
const CGP_MESSAGE: &str = concatcp!("(?P<", CGN_MESSAGE, r">.*)");
/// `:line:column:`
const RP_LINE_COLUMN: &str = r":[0-9]+:[0-9]+:";
const RP_BLANKS: &str = r"\s+";

/// The shape of a `golint` finding, `filename:line:column: message`.
///
/// The filename group is greedy so the last `:line:column:` delimits the
/// message. Unicode is disabled so `.` matches any byte; file names and
/// messages need not be valid UTF-8.
pub const RP_FINDING: &str = concatcp!(
    "(?-u)^", CGP_FILENAME, RP_LINE_COLUMN, RP_BLANKS, CGP_MESSAGE
);

lazy_static! {
    static ref REGEX_FINDING: Regex = {
        defñ!("lazy_static! REGEX_FINDING::new({:?})", RP_FINDING);

        Regex::new(RP_FINDING).unwrap()
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Finding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One line of linter output that has the shape
/// `filename:line:column: message`.
///
/// A `Finding` borrows from the line it was parsed from and lives only as
/// long as that line is being decided upon.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Finding<'a> {
    /// the line as read, including any trailing newline
    line: &'a [u8],
    /// file path portion
    filename: &'a [u8],
    /// message portion; text after the `line:column:` and blanks
    message: &'a [u8],
}

impl fmt::Debug for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finding")
            .field("filename", &self.filename.as_bstr())
            .field("message", &self.message.as_bstr())
            .finish()
    }
}

impl<'a> Finding<'a> {
    /// Parse a raw `line`.
    ///
    /// Surrounding whitespace is ignored for matching but the returned
    /// `Finding` still refers to the whole `line`.
    ///
    /// Returns `None` if the `line` does not have the finding shape.
    pub fn parse(line: &'a [u8]) -> Option<Finding<'a>> {
        defn!("({:?})", buffer_to_String_noraw(line));
        let captures = match REGEX_FINDING.captures(line.trim()) {
            Some(val) => val,
            None => {
                defx!("no match; return None");
                return None;
            }
        };
        // both groups always participate in a match
        let filename: &'a [u8] = captures.name(CGN_FILENAME)?.as_bytes();
        let message: &'a [u8] = captures.name(CGN_MESSAGE)?.as_bytes();
        let finding = Finding {
            line,
            filename,
            message,
        };
        defx!("return {:?}", finding);

        Some(finding)
    }

    /// The line as read.
    pub const fn line(&self) -> &'a [u8] {
        self.line
    }

    pub const fn filename(&self) -> &'a [u8] {
        self.filename
    }

    pub const fn message(&self) -> &'a [u8] {
        self.message
    }
}

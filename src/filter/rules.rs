// src/filter/rules.rs

//! The fixed rules that decide whether a line of `golint` output is
//! forwarded or suppressed.
//!
//! There are two kinds of rule, checked in this order:
//!
//! 1. the path exclusion rule; findings in an [`INTERNAL_DIR`] directory are
//!    suppressed.
//! 2. the suppression rules; findings whose message matches one of
//!    [`SUPPRESSION_PATTERNS`] are suppressed.
//!
//! Both are built once and never change during a run.
//!
//! [`INTERNAL_DIR`]: crate::common::INTERNAL_DIR

use ::bstr::ByteSlice; // adds `starts_with_str`, `contains_str` to `[u8]`
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

use crate::common::INTERNAL_DIR;
use crate::data::finding::Finding;

/// Index into [`SUPPRESSION_PATTERNS`].
pub type RuleIndex = usize;

/// Count of [`SUPPRESSION_PATTERNS`].
pub const SUPPRESSION_RULES_COUNT: usize = 7;

/// Message patterns of stylistic notices that are never forwarded.
/// Case-sensitive, anchored at the start of the message.
pub const SUPPRESSION_PATTERNS: [&str; SUPPRESSION_RULES_COUNT] = [
    // comment on exported function Foo should be of the form "Foo ..."
    r"^comment on ",
    // const myConst should be MyConst
    r"^const [a-z_]",
    r"^exported [a-z]+ [A-Za-z0-9_.]+ should have comment ",
    r"^if block ends with a return statement, so drop this else and outdent its block",
    // should replace i += 1 with i++
    r"^should replace [A-Za-z0-9_.]+ [+-]= ",
    r"^package comment should be of the form ",
    r"^receiver name [A-Za-z0-9_]+ should be consistent with previous receiver name ",
];

lazy_static! {
    /// Compiled [`SUPPRESSION_PATTERNS`], same order.
    static ref SUPPRESSION_RULES: Vec<Regex> = {
        defñ!("lazy_static! SUPPRESSION_RULES");

        SUPPRESSION_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).unwrap())
            .collect()
    };
}

/// path prefix of a file in the internal directory, e.g. `internal/foo.go`
const INTERNAL_PREFIX: &str = concatcp!(INTERNAL_DIR, "/");
/// path segment of the internal directory, e.g. `pkg/internal/foo.go`
const INTERNAL_SEGMENT: &str = concatcp!("/", INTERNAL_DIR, "/");

/// What to do with one line of linter output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineDecision {
    /// A finding that no rule suppresses.
    Forward,
    /// Not a finding. Forwarded unmodified.
    Unrecognized,
    /// A finding in an internal directory.
    SuppressPath,
    /// A finding whose message matched the suppression rule at this index.
    SuppressMessage(RuleIndex),
}

impl LineDecision {
    /// Should the line be written out?
    pub const fn is_forward(&self) -> bool {
        matches!(self, LineDecision::Forward | LineDecision::Unrecognized)
    }
}

/// Is `filename` within an internal directory?
pub fn is_internal_path(filename: &[u8]) -> bool {
    filename.starts_with_str(INTERNAL_PREFIX) || filename.contains_str(INTERNAL_SEGMENT)
}

/// Index of the first suppression rule matching `message`, if any.
pub fn suppression_rule_match(message: &[u8]) -> Option<RuleIndex> {
    SUPPRESSION_RULES
        .iter()
        .position(|rule| rule.is_match(message))
}

/// Decide what to do with a `Finding`.
pub fn decide(finding: &Finding) -> LineDecision {
    if is_internal_path(finding.filename()) {
        return LineDecision::SuppressPath;
    }
    match suppression_rule_match(finding.message()) {
        Some(index) => LineDecision::SuppressMessage(index),
        None => LineDecision::Forward,
    }
}

/// Decide what to do with one raw `line`.
pub fn classify(line: &[u8]) -> LineDecision {
    let decision = match Finding::parse(line) {
        Some(finding) => decide(&finding),
        None => LineDecision::Unrecognized,
    };
    defo!("{:?}", decision);

    decision
}

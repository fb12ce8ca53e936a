// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use std::process::ExitCode;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// the wrapped program
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The linter program invoked by the `golint-filter` binary.
/// Found via the `PATH`.
pub const GOLINT: &str = "golint";

/// Directory name whose contents are never reported.
pub const INTERNAL_DIR: &str = "internal";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// process exit
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Exit code for any internal failure.
pub const EXIT_ERR: i32 = 1;

/// Convert a child process exit code to this process' [`ExitCode`].
///
/// Codes that do not fit a `u8` (only possible on Windows) become
/// [`EXIT_ERR`].
pub fn exitcode_from(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(val) => ExitCode::from(val),
        Err(_) => ExitCode::from(EXIT_ERR as u8),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// misc.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Owned raw bytes of one line.
pub type Bytes = Vec<u8>;

/// Newline as a byte.
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = 10;

// src/bin/golint-filter.rs

//! Driver program _golint-filter_ drives the [_glflib_].
//!
//! All command-line arguments are passed verbatim to `golint`.
//! `golint` stdout is read one line at a time; each line is forwarded to
//! stdout or suppressed according to the fixed [`rules`].
//! `golint` stderr is passed straight through.
//!
//! The exit code is the `golint` exit code. If `golint` could not be run, or
//! did not exit normally, then the exit code is 1.
//!
//! [_glflib_]: glflib
//! [`rules`]: glflib::filter::rules

#![allow(non_camel_case_types)]

use std::ffi::OsString;
use std::process::ExitCode;

use ::anyhow::Context;
use ::clap::Parser;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};
use ::si_trace_print::stack::stack_offset_set;

use ::glflib::common::{
    exitcode_from,
    EXIT_ERR,
    GOLINT,
};
use ::glflib::e_err;
use ::glflib::runner::lintrunner::{
    LintOutcome,
    LintRunner,
};

/// program name used when the invocation name is not available
const PROGRAM_NAME: &str = "golint-filter";

// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
// * help and version flags are disabled so `-h`, `--help`, `-V`, and
//   `--version` are passed to `golint`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = PROGRAM_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
)]
struct CLI_Args {
    /// Arguments passed verbatim to `golint`.
    #[clap(
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
    )]
    golint_args: Vec<OsString>,
}

/// The name this program was invoked as, for error messages.
fn invocation_name() -> String {
    match std::env::args_os().next() {
        Some(arg0) => arg0.to_string_lossy().into_owned(),
        None => String::from(PROGRAM_NAME),
    }
}

/// The command-line arguments given to `CLI_Args::parse_from`.
///
/// An end-of-options marker `--` is inserted after the program name. clap
/// consumes only that first `--`, so every given argument, including any
/// given `--`, becomes a value of `golint_args`.
fn cli_args_marked() -> impl Iterator<Item = OsString> {
    let mut args_os = std::env::args_os();
    let arg0: OsString = args_os
        .next()
        .unwrap_or_else(|| OsString::from(PROGRAM_NAME));

    std::iter::once(arg0)
        .chain(std::iter::once(OsString::from("--")))
        .chain(args_os)
}

/// Run `golint` with `golint_args`, filtering into this process' stdout.
fn run(golint_args: &[OsString]) -> anyhow::Result<LintOutcome> {
    defn!("{:?}", golint_args);
    let runner = LintRunner::new(GOLINT, golint_args);
    let stdout = std::io::stdout();
    let outcome: LintOutcome = runner
        .run(stdout.lock())
        .with_context(|| format!("running {}", GOLINT))?;
    defx!("{:?}", outcome);

    Ok(outcome)
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse_from(cli_args_marked());
    defo!("args {:?}", args);

    let exitcode: ExitCode = match run(&args.golint_args) {
        Ok(LintOutcome::Exited(code)) => exitcode_from(code),
        Ok(LintOutcome::Abnormal(status)) => {
            e_err!(GOLINT, "{}", status);
            exitcode_from(EXIT_ERR)
        }
        Err(err) => {
            e_err!(invocation_name(), "{:#}", err);
            exitcode_from(EXIT_ERR)
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}

// src/runner/lintrunner.rs

//! Runs the linter process. Its stdout is read through a [`LineFilter`], its
//! stderr is passed straight through to this process' stderr.
//! It uses `std::process::Child` to start and manage the linter process.
//!
//! [`LineFilter`]: crate::filter::linefilter::LineFilter

use std::ffi::{
    OsStr,
    OsString,
};
use std::io::{
    BufReader,
    Error,
    Result,
    Write,
};
use std::process::{
    Child,
    ChildStdout,
    Command,
    Stdio,
};

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::de_err;
use crate::filter::linefilter::LineFilter;

/// Linter process exit result
pub type ExitStatus = std::process::ExitStatus;

/// How the linter process ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LintOutcome {
    /// The process exited normally with this exit code. May be non-zero.
    Exited(i32),
    /// The process ended without an exit code, e.g. killed by a signal.
    Abnormal(ExitStatus),
}

/// A linter command. Each call to [`run`] starts a new process.
///
/// [`run`]: LintRunner::run
#[derive(Clone, Debug)]
pub struct LintRunner {
    /// program name or path; names are found via the `PATH`
    program: OsString,
    /// arguments passed verbatim to the `program`
    args: Vec<OsString>,
}

/// Kill a child process after a failure on this side of the pipe, then reap
/// it. Errors are ignored; the child may have already exited.
fn kill_and_reap(child: &mut Child) {
    defn!("PID {}", child.id());
    if let Err(_err) = child.kill() {
        de_err!("PID {} kill() error {}", child.id(), _err);
    }
    if let Err(_err) = child.wait() {
        de_err!("PID {} wait() error {}", child.id(), _err);
    }
    defx!();
}

impl LintRunner {
    pub fn new<P, I, A>(program: P, args: I) -> LintRunner
    where
        P: AsRef<OsStr>,
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        let program: OsString = program.as_ref().to_os_string();
        let args: Vec<OsString> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        defñ!("program {:?}, args {:?}", program, args);

        LintRunner { program, args }
    }

    /// Start the linter process, filter its stdout into `writer`, and wait for
    /// it to exit.
    ///
    /// The process' stdin and stderr are inherited from this process.
    ///
    /// Returns `Err` if the process could not be started, its stdout could not
    /// be read, `writer` could not be written, or the process could not be
    /// waited upon. If the failure happens while the process runs then the
    /// process is killed.
    pub fn run<W: Write>(&self, writer: W) -> Result<LintOutcome> {
        defn!("{:?} {:?}", self.program, self.args);

        let result = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn();
        let mut process: Child = match result {
            Ok(p) => p,
            Err(err) => {
                defx!("spawn error {}", err);
                return Err(Error::new(
                    err.kind(),
                    format!("failed to start {:?}: {}", self.program.to_string_lossy(), err),
                ));
            }
        };
        let _pid: u32 = process.id();
        defo!("PID {}", _pid);

        let process_stdout: ChildStdout = match process.stdout.take() {
            Some(s) => s,
            None => {
                kill_and_reap(&mut process);
                let s = format!("{:?} stdout was None", self.program.to_string_lossy());
                defx!("{}", s);
                return Err(Error::other(s));
            }
        };

        {
            let mut line_filter = LineFilter::new(BufReader::new(process_stdout), writer);
            if let Err(err) = line_filter.run() {
                // drops the read end of the pipe before the kill
                drop(line_filter);
                kill_and_reap(&mut process);
                defx!("PID {} filter error {}", _pid, err);
                return Err(err);
            }
            // the read end of the pipe is dropped here
        }

        let exit_status: ExitStatus = match process.wait() {
            Ok(val) => val,
            Err(err) => {
                defx!("PID {} wait error {}", _pid, err);
                return Err(Error::new(
                    err.kind(),
                    format!("{:?} wait failed: {}", self.program.to_string_lossy(), err),
                ));
            }
        };
        let outcome: LintOutcome = match exit_status.code() {
            Some(code) => LintOutcome::Exited(code),
            None => LintOutcome::Abnormal(exit_status),
        };
        defx!("PID {} {:?}", _pid, outcome);

        Ok(outcome)
    }
}

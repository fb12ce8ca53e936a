// src/filter/linefilter.rs

//! Implements a [`LineFilter`], the line-at-a-time loop that reads linter
//! output, decides upon each line, and writes the forwarded lines.
//!
//! [`LineFilter`]: crate::filter::linefilter::LineFilter

use std::io::{
    BufRead,
    Error,
    Result,
    Write,
};

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::{
    Bytes,
    NLu8,
};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::buffer_to_String_noraw;
use crate::filter::rules::{
    classify,
    LineDecision,
};

/// Initial capacity of the line buffer. Grows as needed.
pub const LINE_BUFFER_SZ: usize = 512;

/// Reads lines from `reader`, writes forwarded lines to `writer`.
///
/// Only one line is held at a time. Forwarded lines are written
/// byte-for-byte as read and flushed immediately, so output order equals
/// input order.
pub struct LineFilter<R, W>
where
    R: BufRead,
    W: Write,
{
    reader: R,
    writer: W,
    /// reused for each line
    buffer: Bytes,
}

impl<R, W> std::fmt::Debug for LineFilter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineFilter")
            .field("buffer.len", &self.buffer.len())
            .field("buffer.capacity", &self.buffer.capacity())
            .finish()
    }
}

impl<R, W> LineFilter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> LineFilter<R, W> {
        defñ!();

        LineFilter {
            reader,
            writer,
            buffer: Bytes::with_capacity(LINE_BUFFER_SZ),
        }
    }

    /// Decide upon and possibly write one line.
    fn process_line(&mut self) -> Result<()> {
        let decision: LineDecision = classify(&self.buffer);
        if decision.is_forward() {
            self.writer.write_all(&self.buffer)?;
            self.writer.flush()?;
        }

        Ok(())
    }

    /// Process all lines until the end of the `reader`.
    ///
    /// A final line without a trailing newline is processed like any other.
    ///
    /// Any read error, or any write error, ends processing.
    pub fn run(&mut self) -> Result<()> {
        defn!();
        loop {
            match self.reader.read_until(NLu8, &mut self.buffer) {
                Ok(0) => {
                    defo!("end of stream");
                    break;
                }
                Ok(_len) => {
                    defo!("read {} bytes {:?}", _len, buffer_to_String_noraw(&self.buffer));
                    if let Err(err) = self.process_line() {
                        defx!("write error {}", err);
                        return Err(Error::new(
                            err.kind(),
                            format!("write of filtered output failed: {}", err),
                        ));
                    }
                    self.buffer.clear();
                }
                Err(err) => {
                    defx!("read error {}", err);
                    return Err(Error::new(
                        err.kind(),
                        format!("read of linter output failed: {}", err),
                    ));
                }
            }
        }
        defx!();

        Ok(())
    }
}

// src/data/mod.rs

//! The `data` module is data containers for lines of linter output.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of bytes read from the linter's standard output
//! that:
//!
//! * begins after a prior "line" or at the beginning of the output.
//! * ends with a newline character `'\n'` or at the end of the output.
//!
//! A "line" is only held while it is being decided upon.
//!
//! ### Finding
//!
//! A "finding" is a "line" with the shape `filename:line:column: message`.
//!
//! A "finding" is represented by a [`Finding`], which borrows the filename
//! and message portions from its "line".
//!
//! [`Finding`]: crate::data::finding::Finding

pub mod finding;

// src/runner/mod.rs

//! The `runner` module starts the linter process and supervises it until it
//! exits.

pub mod lintrunner;

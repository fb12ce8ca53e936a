// src/tests/mod.rs

//! Tests for _glflib_.
//!
//! Tests are placed at `src/tests/`, inside the `glflib`, for crate-internal
//! visibility. Tests of the built `golint-filter` program are at top-level
//! path `tests/`.

pub mod finding_tests;
#[cfg(unix)]
pub mod lintrunner_tests;

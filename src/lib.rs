// src/lib.rs

//! _glflib_ runs `golint` and filters what it prints.
//!
//! Findings under an `internal/` directory and a fixed set of stylistic
//! notices are dropped. All other lines pass through unchanged and in order.

pub mod common;
pub mod data;
pub mod debug;
pub mod filter;
pub mod runner;
#[cfg(test)]
pub mod tests;

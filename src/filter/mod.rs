// src/filter/mod.rs

//! The `filter` module decides which lines of linter output are forwarded.
//!
//! The [`rules`] are fixed. The [`LineFilter`] applies them to a stream of
//! lines.
//!
//! [`LineFilter`]: crate::filter::linefilter::LineFilter

pub mod linefilter;
pub mod rules;

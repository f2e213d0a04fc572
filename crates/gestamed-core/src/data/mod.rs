//! Embedded knowledge tables.
//!
//! Three independently maintained drug tables (essential / comprehensive /
//! legacy) with overlapping but not identical coverage, plus the
//! name-variation and interaction tables. All data is process-wide,
//! immutable, and loaded with the binary; the tables are deliberately NOT
//! merged: when they disagree on a category, the pipeline stage that
//! answers decides which value the caller sees.

pub mod comprehensive;
pub mod essential;
pub mod interactions;
pub mod legacy;
pub mod translations;

//! Prelude module for persian_date crate.
//!
//! Re-exports the derive macros used by the date types.

pub use derive_more::Display;

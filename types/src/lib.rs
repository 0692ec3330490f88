//! Common types used throughout cubehall.
//!
//! The table module holds everything a presentation layer needs to render a
//! cube-pick table: seat state, the table lifecycle phase, round summaries,
//! and the session configuration with its validation rules.

mod table;

pub use table::*;

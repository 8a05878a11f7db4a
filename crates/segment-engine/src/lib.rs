//! Segment composition engine
//!
//! The pure core shared by the interactive view and the report
//! exporter: [`compose`] partitions one paragraph into plain and
//! matched runs, and [`highlight`] maps those runs to styled inline
//! output. No I/O, no shared state; every render recomputes from the
//! immutable analysis result.

pub mod compose;
pub mod highlight;

pub use compose::compose;
pub use highlight::{inline_runs, HighlightStyle, InlineRun};

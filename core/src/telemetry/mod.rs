//! telemetry/mod.rs
//! Size accounting for codec runs.
//!
//! Summary: counters collect call and byte totals while calls run; a
//! snapshot freezes them with derived ratios at the end of a run.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;

//! codec/mod.rs
//! Pull-based chunked compression and decompression.
//!
//! Notes:
//! - One engine session per call; sessions are never shared or reused.
//! - Output accumulates via delta accounting against the engine's
//!   cumulative total-produced counter.

pub mod types;
pub mod deflate;

pub use types::*;
pub use deflate::*;

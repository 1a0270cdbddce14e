//! telemetry/counters.rs
//! Mutable counters used while codec calls run.
//!
//! Summary: collects call counts and byte counts for deflate/inflate.
//! Converted into an immutable CodecSnapshot at the end of a run.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected across codec calls
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CodecCounters {
    pub calls_deflate: u64,
    pub calls_inflate: u64,
    pub bytes_plaintext: u64,
    pub bytes_compressed: u64,
}

impl CodecCounters {
    /// Record one completed compress call.
    ///
    /// - `pt_len`: plaintext length fed to the engine
    /// - `comp_len`: compressed stream length produced
    pub fn add_deflate(&mut self, pt_len: usize, comp_len: usize) {
        self.calls_deflate += 1;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_compressed += comp_len as u64;
    }

    /// Record one completed decompress call.
    ///
    /// - `pt_len`: plaintext length recovered
    /// - `comp_len`: compressed stream length consumed
    pub fn add_inflate(&mut self, pt_len: usize, comp_len: usize) {
        self.calls_inflate += 1;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_compressed += comp_len as u64;
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        self.calls_deflate += other.calls_deflate;
        self.calls_inflate += other.calls_inflate;
        self.bytes_plaintext += other.bytes_plaintext;
        self.bytes_compressed += other.bytes_compressed;
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

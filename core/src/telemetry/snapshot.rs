//! telemetry/snapshot.rs
//!
//! Immutable snapshot of a codec run.
//!
//! Design notes:
//! - `CodecSnapshot` freezes the counters with derived ratio, space saving,
//!   and plaintext throughput.
//! - Serialized with serde so surfaces can emit it as JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;

/// Percentage shrink going from `before` to `after` bytes.
pub fn percent_decrease(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (1.0 - after as f64 / before as f64) * 100.0
}

/// Percentage growth going from `before` to `after` bytes.
pub fn percent_increase(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (after as f64 / before as f64 - 1.0) * 100.0
}

/// Core snapshot of one codec run.
/// Captures counters, compression ratio, throughput, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecSnapshot {
    pub calls_deflate: u64,
    pub calls_inflate: u64,
    pub bytes_plaintext: u64,
    pub bytes_compressed: u64,
    pub compression_ratio: f64,
    pub space_saving_percent: f64,
    pub throughput_plaintext_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl CodecSnapshot {
    pub fn from(counters: &CodecCounters, elapsed: Duration) -> Self {
        let compression_ratio = if counters.bytes_plaintext > 0 {
            counters.bytes_compressed as f64 / counters.bytes_plaintext as f64
        } else {
            0.0
        };

        let space_saving_percent =
            percent_decrease(counters.bytes_plaintext, counters.bytes_compressed);

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_plaintext as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            calls_deflate: counters.calls_deflate,
            calls_inflate: counters.calls_inflate,
            bytes_plaintext: counters.bytes_plaintext,
            bytes_compressed: counters.bytes_compressed,
            compression_ratio,
            space_saving_percent,
            throughput_plaintext_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// Validates internal invariants:
    /// - ratio and throughput are non-negative
    /// - space saving never exceeds 100%
    pub fn sanity_check(&self) -> bool {
        self.compression_ratio >= 0.0
            && self.space_saving_percent <= 100.0
            && self.throughput_plaintext_bytes_per_sec >= 0.0
    }
}

//! zpump-cli
//!
//! Demo surface for zpump-core: deflates a fixed text buffer, reports the
//! size change, then inflates it back. Size reports and the final telemetry
//! snapshot go to stderr; payloads go to stdout.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;

use zpump_core::codec::{compress, decompress};
use zpump_core::constants::DEFAULT_LEVEL;
use zpump_core::telemetry::{percent_decrease, percent_increase, CodecCounters, CodecSnapshot};

const DEMO_TEXT: &str =
    "This is test content just ignore this. hello hello hdd ndddgj hgg iiii hhh dsss";

fn main() -> Result<()> {
    let data = DEMO_TEXT.as_bytes();
    let mut counters = CodecCounters::default();
    let started = Instant::now();

    let packed = compress(data, DEFAULT_LEVEL)?;
    counters.add_deflate(data.len(), packed.len());
    eprintln!(
        "Deflated data: {} -> {} ({:.1}% decrease).",
        data.len(),
        packed.len(),
        percent_decrease(data.len() as u64, packed.len() as u64),
    );
    write_payload(&packed)?;

    let restored = decompress(&packed)?;
    counters.add_inflate(restored.len(), packed.len());
    eprintln!(
        "Inflated data: {} -> {} ({:.1}% increase).",
        packed.len(),
        restored.len(),
        percent_increase(packed.len() as u64, restored.len() as u64),
    );
    write_payload(&restored)?;

    let snapshot = CodecSnapshot::from(&counters, started.elapsed());
    eprintln!("{}", serde_json::to_string(&snapshot)?);

    Ok(())
}

/// Raw payload to stdout, newline-terminated.
fn write_payload(payload: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(payload)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

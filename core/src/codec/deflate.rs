//! codec/deflate.rs
//! Deflate/inflate pump loops over the flate2 session API.
//!
//! Design notes:
//! - The engine reports a cumulative total-produced counter, not a per-call
//!   count, and the scratch buffer is reused across iterations; only the
//!   newly written tail is appended each round.
//! - The input cursor is the engine's cumulative total-consumed counter;
//!   the whole input is bound once, single-shot.
//! - One session per call. flate2 sessions release their native state on
//!   drop, so every exit path releases the session.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::codec::types::{CodecError, Direction, EngineStatus};
use crate::constants::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL, SCRATCH_CHUNK_SIZE};

/// Compress `input` into a zlib stream at the given level (0..=9).
///
/// # Errors
/// - `CodecError::EngineInit` if `level` is outside the engine's range.
/// - `CodecError::Engine` if the engine terminates on anything other than
///   clean stream end.
pub fn compress(input: &[u8], level: u32) -> Result<Vec<u8>, CodecError> {
    if level > MAX_LEVEL {
        return Err(CodecError::EngineInit {
            direction: Direction::Deflate,
            msg: format!("compression level {} not in {}..={}", level, MIN_LEVEL, MAX_LEVEL),
        });
    }
    let mut session = Compress::new(Compression::new(level), true);

    let mut scratch = vec![0u8; SCRATCH_CHUNK_SIZE];
    let mut out = Vec::new();

    // Retrieve the compressed bytes blockwise.
    loop {
        let consumed = session.total_in() as usize;
        let status = session
            .compress(&input[consumed..], &mut scratch, FlushCompress::Finish)
            .map_err(|e| CodecError::Engine {
                direction: Direction::Deflate,
                status: EngineStatus::StreamError as i32,
                msg: e.to_string(),
            })?;

        // Append only the bytes produced since the last iteration.
        let produced = session.total_out() as usize;
        if produced > out.len() {
            out.extend_from_slice(&scratch[..produced - out.len()]);
        }

        match status {
            Status::Ok => continue,
            Status::StreamEnd => return Ok(out),
            other => {
                return Err(CodecError::Engine {
                    direction: Direction::Deflate,
                    status: EngineStatus::from(other) as i32,
                    msg: "stopped before end of stream".into(),
                });
            }
        }
    }
}

/// Compress at the default (best) level.
pub fn compress_default(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    compress(input, DEFAULT_LEVEL)
}

/// Decompress a zlib stream produced by a compatible deflate encoder.
/// Stream parameters come from the embedded header; no level is needed.
///
/// # Errors
/// - `CodecError::Engine` on malformed, truncated, or empty input, or any
///   other terminal status besides clean stream end.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut session = Decompress::new(true);

    let mut scratch = vec![0u8; SCRATCH_CHUNK_SIZE];
    let mut out = Vec::new();

    // Get the decompressed bytes blockwise using repeated pulls.
    loop {
        let consumed = session.total_in() as usize;
        // No-flush: the finish hint would make the engine demand room for the
        // whole output in one call, which the bounded scratch cannot promise.
        let status = session
            .decompress(&input[consumed..], &mut scratch, FlushDecompress::None)
            .map_err(|e| CodecError::Engine {
                direction: Direction::Inflate,
                status: EngineStatus::DataError as i32,
                msg: e.to_string(),
            })?;

        let produced = session.total_out() as usize;
        if produced > out.len() {
            out.extend_from_slice(&scratch[..produced - out.len()]);
        }

        match status {
            Status::Ok => continue,
            Status::StreamEnd => return Ok(out),
            other => {
                return Err(CodecError::Engine {
                    direction: Direction::Inflate,
                    status: EngineStatus::from(other) as i32,
                    msg: "stopped before end of stream".into(),
                });
            }
        }
    }
}

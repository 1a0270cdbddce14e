/// Scratch buffer size for one pump iteration (10 KiB).
/// Bounds the per-iteration copy, never the total output.
pub const SCRATCH_CHUNK_SIZE: usize = 10 * 1024;

/// Compression levels accepted by the deflate engine.
pub const MIN_LEVEL: u32 = 0;
pub const MAX_LEVEL: u32 = 9;

/// Default compression level (best compression).
pub const DEFAULT_LEVEL: u32 = 9;

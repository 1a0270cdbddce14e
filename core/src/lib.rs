//! zpump-core
//!
//! Chunked deflate/inflate codec over an external compression engine.
//! Single-threaded, synchronous, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Codec and reporting
pub mod codec;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{compress, compress_default, decompress, CodecError};
    pub use crate::telemetry::{CodecCounters, CodecSnapshot};
}

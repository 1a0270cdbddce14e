//! codec/types.rs
//! Error taxonomy and engine status codes.
use std::fmt;
use num_enum::TryFromPrimitive;

/// Engine status codes, numerically identical to the deflate engine's
/// native return codes.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum EngineStatus {
    Ok          = 0,
    StreamEnd   = 1,
    NeedDict    = 2,
    ErrNo       = -1,
    StreamError = -2,
    DataError   = -3,
    MemError    = -4,
    BufError    = -5,
}

impl From<flate2::Status> for EngineStatus {
    fn from(status: flate2::Status) -> Self {
        match status {
            flate2::Status::Ok => EngineStatus::Ok,
            flate2::Status::StreamEnd => EngineStatus::StreamEnd,
            flate2::Status::BufError => EngineStatus::BufError,
        }
    }
}

/// Render a raw status as "Name (code)" when known, the bare code otherwise.
pub fn status_name_or_code(raw: i32) -> String {
    match EngineStatus::try_from_primitive(raw) {
        Ok(variant) => format!("{:?} ({})", variant, raw),
        Err(_) => format!("({})", raw),
    }
}

/// Transform direction, carried as error context.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Deflate,
    Inflate,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Deflate => write!(f, "deflate"),
            Direction::Inflate => write!(f, "inflate"),
        }
    }
}

#[derive(Debug)]
pub enum CodecError {
    /// Session initialization failed (invalid level, resource exhaustion).
    EngineInit { direction: Direction, msg: String },
    /// The pump loop reached a terminal status other than clean stream end.
    Engine { direction: Direction, status: i32, msg: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CodecError::*;
        match self {
            EngineInit { direction, msg } =>
                write!(f, "{} init failed: {}", direction, msg),
            Engine { direction, status, msg } =>
                write!(f, "{} failed: {}: {}",
                       direction, status_name_or_code(*status), msg),
        }
    }
}

impl std::error::Error for CodecError {}

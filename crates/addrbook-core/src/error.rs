// crates/addrbook-core/src/error.rs

use crate::geo::Axis;
use thiserror::Error;

/// Crate-wide error type.
///
/// Domain errors (`InvalidCoordinate`, `InvalidRadius`, `NotFound`) are caller
/// mistakes: synchronous, locally detectable and non-retryable. The core never
/// swallows them; they propagate via `?` to whoever can translate them into a
/// user-facing response. `Io` / `Bincode` only occur in the persistence layer.
#[derive(Debug, Error)]
pub enum AddrBookError {
    /// A latitude or longitude outside its valid geographic range.
    #[error("{axis} {value} is out of range [{}, {}]", .axis.min(), .axis.max())]
    InvalidCoordinate { axis: Axis, value: f64 },

    /// A negative (or NaN) search radius.
    #[error("search radius must be non-negative, got {0}")]
    InvalidRadius(f64),

    /// Input that could not be parsed into the expected shape.
    ///
    /// Produced by the interchange layer (JSON import) and by transport
    /// parsing upstream of the core, never by the validator itself.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No address with the given id.
    #[error("no address with id {0}")]
    NotFound(u64),

    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;

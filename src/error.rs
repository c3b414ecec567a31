//! Crate error type

use thiserror::Error;

/// Errors raised at construction time or at the rendering/config boundary.
///
/// The per-frame step never fails; everything here is a precondition or
/// input problem caught before the simulation runs.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor was handed a value outside its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Geometry or color data that cannot be drawn
    #[error("validation error: {0}")]
    Validation(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

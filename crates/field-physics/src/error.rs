//! Configuration errors
//!
//! The per-frame hot path is total by construction; the only failures this
//! crate can report are invalid external configuration, rejected once when a
//! simulation is built or reconfigured.

use thiserror::Error;

/// Result type alias for configuration-time operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field parameter is non-finite or outside its legal range.
    #[error("invalid field parameters: {0}")]
    Params(String),

    /// The simulation bounds are degenerate or non-finite.
    #[error("invalid bounds: {0}")]
    Bounds(String),

    /// The boundary half-extent must be finite and positive.
    #[error("invalid boundary extent: {0}")]
    Boundary(f32),

    /// The force-cache window must be finite and non-negative.
    #[error("invalid cache window: {0}")]
    CacheWindow(f32),
}

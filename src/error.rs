//! Error taxonomy for the generation core.
//!
//! Every failure is a local precondition violation surfaced before any
//! output is produced. Generation either fully succeeds and returns a
//! complete, self-consistent result, or fails up front; there is no
//! partial-failure mode and nothing transient to retry against.

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, MandalaError>;

/// Errors that can occur while composing a mandala.
#[derive(Debug, thiserror::Error)]
pub enum MandalaError {
    /// A caller-supplied argument violated a precondition: empty palette,
    /// non-positive canvas size, empty choice set, or inverted integer
    /// bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl MandalaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MandalaError::InvalidArgument(msg.into())
    }
}

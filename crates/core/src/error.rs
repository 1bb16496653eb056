//! Error types for the blobvatar core.

use thiserror::Error;

/// Errors produced by avatar generation.
///
/// Generation is a pure function of (seed, options): the only failure mode
/// is a bad configuration caught at the boundary. Arithmetic edge cases
/// inside the algorithm are handled by clamping, never by erroring.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The requested canvas size was non-finite or not strictly positive.
    #[error("invalid size: {size} (must be finite and greater than zero)")]
    InvalidSize { size: f64 },
}

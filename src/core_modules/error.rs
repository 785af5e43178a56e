// THEORY:
// A single error enum carries every failure the diff path can produce, so
// callers can match on the branch instead of parsing strings. The core itself
// performs no I/O and cannot fail transiently; every variant here is terminal
// for the current comparison, and no partial region list ever escapes an
// error.

use std::path::PathBuf;

/// Unified error type for the comparison pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A source image could not be read or decoded. Surfaced at the decode
    /// boundary, before normalization proceeds.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The two canvases handed to the extractor have different dimensions.
    /// The normalizer guarantees equal shapes, so this is a contract
    /// violation by the caller, not a recoverable condition.
    #[error(
        "canvas dimensions do not match: expected {expected_width}x{expected_height}, actual {actual_width}x{actual_height}"
    )]
    ShapeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// The composite image could not be encoded.
    #[error("failed to encode composite image: {0}")]
    Encode(#[source] image::ImageError),

    /// An export file could not be written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

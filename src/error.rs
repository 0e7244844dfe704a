//! The single error type shared by every codec stage, so a failure in any
//! stage propagates unchanged to the CLI entry points.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("value {value} does not fit in {width} unsigned bits")]
    UnsignedOverflow { value: u64, width: u32 },

    #[error("value {value} does not fit in {width} signed bits")]
    SignedOverflow { value: i64, width: u32 },

    #[error("compressed stream does not start with the expected header")]
    BadMagic,

    #[error("malformed compressed header: {0}")]
    BadHeader(String),

    #[error("invalid compressed image dimensions {width}x{height}: {reason}")]
    BadDimensions {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("compressed stream ended early: expected {expected} codewords, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    ImageTooSmall { width: usize, height: usize },

    #[error("images differ too much in size to diff: {0}x{1} vs {2}x{3}")]
    DiffSizeMismatch(usize, usize, usize, usize),
}

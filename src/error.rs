//! Typed errors for spec validation and enumeration.

use thiserror::Error;

/// A generation spec that cannot produce a well-defined candidate space.
///
/// All variants are detected before any enumeration or output begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("no character set selected (enable -l/-u/-d/-s or pass custom characters)")]
    EmptyCharset,

    #[error("minimum length {min} is greater than maximum length {max}")]
    LengthRange { min: usize, max: usize },

    #[error("pattern uses the 'w' token but no word list was loaded")]
    MissingWordList,

    #[error("candidate space exceeds the addressable range")]
    TooManyCandidates,
}

/// Contract violation while addressing into the candidate space.
///
/// Chunk math that produces an out-of-range index is a defect, not a
/// recoverable condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("index {index} is outside the candidate space of size {total}")]
    IndexOutOfRange { index: u128, total: u128 },
}

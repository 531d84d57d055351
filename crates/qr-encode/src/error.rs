use thiserror::Error;

/// The error type returned by every fallible operation in this crate.
///
/// Ways to handle `CapacityExceeded` include:
///
/// - Decrease the error correction level if it was greater than `EcLevel::L`.
/// - If `encode()` was called with a forced version hint, raise that version.
/// - Change the text or binary data to be shorter.
/// - Change the text to fit the character set of a particular mode (e.g. alphanumeric).
/// - Propagate the error upward to the caller/user.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A character reached a mode-specific packer that cannot represent it, or a
    /// Kanji/Shift_JIS byte pair fell outside the standard's encodable ranges.
    #[error("invalid content for the selected mode: {0}")]
    InvalidContent(String),

    /// The data bits, once assembled, do not fit any candidate version at the
    /// requested error correction level (or the forced version, if one was given).
    #[error("data length = {data_bits} bits exceeds capacity = {capacity_bits} bits")]
    CapacityExceeded {
        data_bits: usize,
        capacity_bits: usize,
    },

    /// The requested charset hint cannot be used to encode the given content,
    /// or names a charset this crate does not recognize.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// A sanity check inside the assembler or matrix builder failed. This indicates
    /// a bug in this crate's tables or arithmetic, not a problem with caller input.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

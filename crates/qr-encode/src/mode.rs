use crate::charset::Charset;
use crate::version::Version;

/// The set of all legal characters in alphanumeric mode, where each character's
/// value maps to its index in this string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Describes how a segment's data bits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    /// Extended Channel Interpretation: a header-only marker, never a payload mode.
    Eci,
}

impl Mode {
    // Returns an unsigned 4-bit integer value (range 0 to 15)
    // representing the mode indicator bits for this mode object.
    pub fn mode_bits(&self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0b0001,
            Alphanumeric => 0b0010,
            Byte => 0b0100,
            Kanji => 0b1000,
            Eci => 0b0111,
        }
    }

    // Returns the bit width of the character count field for a segment in this mode
    // in a QR Code at the given version number. The result is in the range [0, 16].
    pub fn num_char_count_bits(&self, ver: Version) -> u8 {
        use Mode::*;
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Kanji => [8, 10, 12],
            Eci => [0, 0, 0],
        })[version_band(ver)]
    }
}

// Versions 1-9, 10-26, and 27-40 each share one character-count field width.
fn version_band(ver: Version) -> usize {
    (usize::from(ver.value()) + 7) / 17
}

/// Picks the single mode that packs `content` most densely, given the caller's
/// declared charset. Does not attempt multi-segment mode switching.
pub fn choose_mode(content: &str, charset: Charset) -> Mode {
    if charset == Charset::ShiftJis && is_only_double_byte_kanji(content) {
        return Mode::Kanji;
    }
    if content.is_empty() {
        return Mode::Byte;
    }
    if !is_alphanumeric(content) {
        Mode::Byte
    } else if !is_numeric(content) {
        Mode::Alphanumeric
    } else {
        Mode::Numeric
    }
}

/// Tests whether every character of `text` is a decimal digit.
pub fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

/// Tests whether every character of `text` is in the QR alphanumeric charset.
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

/// Tests whether `content`, re-encoded as Shift_JIS, consists entirely of
/// double-byte Kanji code points (every leading byte in `[0x81,0x9F] ∪ [0xE0,0xEB]`).
/// Any content that fails to round-trip through Shift_JIS is not eligible.
pub fn is_only_double_byte_kanji(content: &str) -> bool {
    let (encoded, _, had_errors) = encoding_rs::SHIFT_JIS.encode(content);
    if had_errors || encoded.len() % 2 != 0 {
        return false;
    }
    encoded
        .chunks_exact(2)
        .all(|pair| matches!(pair[0], 0x81..=0x9F | 0xE0..=0xEB))
}

use crate::bit_stream::BitStream;
use crate::charset::Charset;
use crate::error::QrError;
use crate::mode::{Mode, ALPHANUMERIC_CHARSET};
use crate::version::Version;

/// A segment of character/binary/control data in a QR Code symbol.
///
/// The mid-level way to create a segment is to take the payload data and call a
/// static factory function such as `Segment::make_numeric()`. The low-level way
/// is to custom-build the bit stream and call `Segment::new()` directly.
#[derive(Clone, PartialEq, Eq)]
pub struct Segment {
    pub mode: Mode,

    // The length of this segment's unencoded data: characters for
    // numeric/alphanumeric/Kanji mode, bytes for byte mode, 0 for ECI mode.
    pub num_chars: usize,

    pub data: BitStream,
}

impl Segment {
    pub fn new(mode: Mode, num_chars: usize, data: BitStream) -> Self {
        Self {
            mode,
            num_chars,
            data,
        }
    }

    /// Encodes raw `data` in byte mode, one 8-bit value per input byte.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bs = BitStream::with_capacity(data.len() * 8);
        for &b in data {
            bs.append_bits(u32::from(b), 8);
        }
        Segment::new(Mode::Byte, data.len(), bs)
    }

    /// Encodes a decimal-digit string in numeric mode.
    ///
    /// Fails with `InvalidContent` if `text` contains a non-digit character.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        let mut bs = BitStream::with_capacity(text.len() * 3 + (text.len() + 2) / 3);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for b in text.bytes() {
            if !b.is_ascii_digit() {
                return Err(QrError::InvalidContent(
                    "numeric mode requires all-digit content".to_string(),
                ));
            }
            accum = accum * 10 + u32::from(b - b'0');
            count += 1;
            if count == 3 {
                bs.append_bits(accum, 10);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            bs.append_bits(accum, u8::from(count * 3 + 1));
        }
        Ok(Segment::new(Mode::Numeric, text.len(), bs))
    }

    /// Encodes a string in alphanumeric mode (0-9, A-Z, space, `$%*+-./:`).
    ///
    /// Fails with `InvalidContent` if `text` contains an unencodable character.
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let mut bs = BitStream::with_capacity(text.len() * 5 + (text.len() + 1) / 2);
        let mut accum: u32 = 0;
        let mut count: u32 = 0;
        for c in text.chars() {
            let i = ALPHANUMERIC_CHARSET.find(c).ok_or_else(|| {
                QrError::InvalidContent(format!("character {c:?} is not alphanumeric"))
            })?;
            accum = accum * 45 + u32::try_from(i).unwrap();
            count += 1;
            if count == 2 {
                bs.append_bits(accum, 11);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            bs.append_bits(accum, 6);
        }
        Ok(Segment::new(Mode::Alphanumeric, text.len(), bs))
    }

    /// Encodes `content` in byte mode under the given charset.
    pub fn make_byte_in_charset(content: &str, charset: Charset) -> Result<Self, QrError> {
        let bytes = charset.encode(content)?;
        Ok(Segment::make_bytes(&bytes))
    }

    /// Encodes `content` in Kanji mode: content is transcoded to Shift_JIS, then
    /// every 2-byte pair is reduced to a 13-bit code per the standard's two
    /// double-byte ranges (`0x8140..=0x9FFC` and `0xE040..=0xEBBF`).
    ///
    /// Fails with `InvalidContent` if the Shift_JIS transcoding produces an odd
    /// byte count or any pair falls outside those two ranges.
    pub fn make_kanji(content: &str) -> Result<Self, QrError> {
        let (encoded, _, had_errors) = encoding_rs::SHIFT_JIS.encode(content);
        if had_errors {
            return Err(QrError::InvalidContent(
                "content is not representable in Shift_JIS".to_string(),
            ));
        }
        if encoded.len() % 2 != 0 {
            return Err(QrError::InvalidContent(
                "Shift_JIS encoding of Kanji content has an odd byte length".to_string(),
            ));
        }

        let num_chars = encoded.len() / 2;
        let mut bs = BitStream::with_capacity(num_chars * 13);
        for pair in encoded.chunks_exact(2) {
            let code = (u32::from(pair[0]) << 8) | u32::from(pair[1]);
            let subtracted = if (0x8140..=0x9FFC).contains(&code) {
                code - 0x8140
            } else if (0xE040..=0xEBBF).contains(&code) {
                code - 0xC140
            } else {
                return Err(QrError::InvalidContent(format!(
                    "Shift_JIS code point {code:#06x} is outside the Kanji-encodable ranges"
                )));
            };
            let packed = (subtracted >> 8) * 0xC0 + (subtracted & 0xFF);
            bs.append_bits(packed, 13);
        }
        Ok(Segment::new(Mode::Kanji, num_chars, bs))
    }

    /// Builds an Extended Channel Interpretation header segment for `assign_val`.
    ///
    /// This crate only emits single-byte ECI designators (`assign_val < 128`),
    /// matching the charset hints it supports.
    pub fn make_eci(assign_val: u32) -> Result<Self, QrError> {
        if assign_val >= 128 {
            return Err(QrError::UnsupportedCharset(
                "only single-byte ECI designators (< 128) are supported".to_string(),
            ));
        }
        let mut bs = BitStream::with_capacity(8);
        bs.append_bits(assign_val, 8);
        Ok(Segment::new(Mode::Eci, 0, bs))
    }

    /// Calculates the number of bits needed to encode `segs` at `version`,
    /// including each segment's mode indicator and character count field.
    /// Returns `None` if a segment's character count overflows its field width.
    pub fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut total: usize = 0;
        for seg in segs {
            let cc_bits = seg.mode.num_char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(cc_bits.into()) {
                if seg.num_chars >= limit {
                    return None;
                }
            }
            total = total.checked_add(4 + usize::from(cc_bits))?;
            total = total.checked_add(seg.data.size())?;
        }
        Some(total)
    }
}

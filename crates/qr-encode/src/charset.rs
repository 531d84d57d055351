use crate::error::QrError;

/// The text encodings this crate understands for byte-mode content and the
/// Kanji classification check. Default is UTF-8; anything else must be named
/// explicitly via a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Iso8859_1,
    ShiftJis,
}

impl Charset {
    pub const DEFAULT: Charset = Charset::Utf8;

    /// Resolves a caller-supplied charset label (case-insensitive, the common
    /// aliases used by HTTP/MIME and IANA) into one of this crate's closed set.
    pub fn from_label(label: &str) -> Result<Self, QrError> {
        match label.to_ascii_uppercase().replace('_', "-").as_str() {
            "UTF-8" | "UTF8" => Ok(Charset::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" => Ok(Charset::Iso8859_1),
            "SHIFT-JIS" | "SHIFT-JIS-2004" | "SJIS" => Ok(Charset::ShiftJis),
            other => Err(QrError::UnsupportedCharset(other.to_string())),
        }
    }

    /// The ECI designator value for this charset, per the standard's registry.
    /// Only single-byte designators (<= 127) are supported by this crate.
    pub fn eci_designator(self) -> u32 {
        match self {
            Charset::Utf8 => 26,
            Charset::Iso8859_1 => 1,
            Charset::ShiftJis => 20,
        }
    }

    /// Encodes `content` as bytes in this charset. Fails if the charset cannot
    /// represent every character (only possible for `Iso8859_1` and `ShiftJis`;
    /// UTF-8 always succeeds since `content` is already a Rust `&str`).
    pub fn encode(self, content: &str) -> Result<Vec<u8>, QrError> {
        match self {
            Charset::Utf8 => Ok(content.as_bytes().to_vec()),
            Charset::Iso8859_1 => encode_latin1(content),
            Charset::ShiftJis => {
                let (encoded, _, had_errors) = encoding_rs::SHIFT_JIS.encode(content);
                if had_errors {
                    Err(QrError::UnsupportedCharset(
                        "content is not representable in Shift_JIS".to_string(),
                    ))
                } else {
                    Ok(encoded.into_owned())
                }
            }
        }
    }
}

fn encode_latin1(content: &str) -> Result<Vec<u8>, QrError> {
    let mut out = Vec::with_capacity(content.len());
    for c in content.chars() {
        let code = c as u32;
        if code > 0xFF {
            return Err(QrError::UnsupportedCharset(format!(
                "character {c:?} is not representable in ISO-8859-1"
            )));
        }
        out.push(code as u8);
    }
    Ok(out)
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn default_to_utf8() {
        assert_eq!(Charset::DEFAULT, Charset::Utf8);
    }

    #[test]
    fn resolve_common_labels_case_insensitively() {
        assert_eq!(Charset::from_label("utf-8").unwrap(), Charset::Utf8);
        assert_eq!(Charset::from_label("UTF8").unwrap(), Charset::Utf8);
        assert_eq!(Charset::from_label("Shift_JIS").unwrap(), Charset::ShiftJis);
        assert_eq!(Charset::from_label("ISO-8859-1").unwrap(), Charset::Iso8859_1);
    }

    #[test]
    fn reject_unknown_labels() {
        assert!(Charset::from_label("EBCDIC").is_err());
    }

    #[test]
    fn encode_ascii_identically_across_charsets() {
        assert_eq!(Charset::Utf8.encode("AB").unwrap(), vec![0x41, 0x42]);
        assert_eq!(Charset::Iso8859_1.encode("AB").unwrap(), vec![0x41, 0x42]);
    }

    #[test]
    fn reject_latin1_content_outside_byte_range() {
        assert!(Charset::Iso8859_1.encode("日本").is_err());
    }

    #[test]
    fn eci_designators_use_single_byte_values() {
        for cs in [Charset::Utf8, Charset::Iso8859_1, Charset::ShiftJis] {
            assert!(cs.eci_designator() <= 127);
        }
    }
}

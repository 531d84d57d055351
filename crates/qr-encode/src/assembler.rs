//! Turns classified content into the final, version-resolved, interleaved
//! codeword stream a matrix can be drawn from: version selection, ECI
//! prefixing, header assembly, termination/padding, and RS block interleaving.

use crate::bit_stream::BitStream;
use crate::charset::Charset;
use crate::ec_level::EcLevel;
use crate::error::QrError;
use crate::mode::{choose_mode, Mode};
use crate::reed_solomon;
use crate::segment::Segment;
use crate::tables::{self, EcBlocks};
use crate::version::Version;

/// The result of payload assembly: a chosen version, the mode that was used to
/// pack the content, and the final interleaved data+EC codeword stream, ready
/// for the matrix builder to place bit-by-bit.
pub struct AssembledPayload {
    pub version: Version,
    pub mode: Mode,
    pub codewords: Vec<u8>,
}

/// Classifies `content`, packs it, resolves a version (or validates a forced
/// one), and produces the fully interleaved codeword stream.
pub fn assemble(
    content: &str,
    ec_level: EcLevel,
    charset: Charset,
    forced_version: Option<Version>,
) -> Result<AssembledPayload, QrError> {
    let mode = choose_mode(content, charset);
    let data_segment = build_data_segment(content, mode, charset)?;

    let mut segments = Vec::with_capacity(2);
    if mode == Mode::Byte && charset != Charset::DEFAULT {
        segments.push(Segment::make_eci(charset.eci_designator())?);
    }
    segments.push(data_segment);

    assemble_segments(segments, mode, ec_level, forced_version)
}

/// Mid-level entry point: assembles a caller-supplied segment sequence
/// directly, skipping mode classification. `reported_mode` is recorded on the
/// returned payload as the symbol's nominal mode (there is no single correct
/// answer once segments mix modes, since the standard allows it but this
/// crate's output record names one mode per symbol).
pub fn assemble_segments(
    segments: Vec<Segment>,
    reported_mode: Mode,
    ec_level: EcLevel,
    forced_version: Option<Version>,
) -> Result<AssembledPayload, QrError> {
    let version = match forced_version {
        Some(v) => v,
        None => select_version(&segments, ec_level)?,
    };

    let capacity_bits = tables::num_data_codewords(version, ec_level) * 8;
    let total_bits = Segment::get_total_bits(&segments, version).ok_or_else(|| {
        QrError::CapacityExceeded {
            data_bits: usize::MAX,
            capacity_bits,
        }
    })?;
    if total_bits > capacity_bits {
        return Err(QrError::CapacityExceeded {
            data_bits: total_bits,
            capacity_bits,
        });
    }

    let mut bits = BitStream::with_capacity(capacity_bits);
    for seg in &segments {
        bits.append_bits(seg.mode.mode_bits(), 4);
        let cc_bits = seg.mode.num_char_count_bits(version);
        bits.append_bits(seg.num_chars as u32, cc_bits);
        bits.append_stream(&seg.data);
    }

    terminate_and_pad(&mut bits, capacity_bits)?;

    let codewords = interleave(&bits.to_bytes(), version, ec_level)?;

    Ok(AssembledPayload {
        version,
        mode: reported_mode,
        codewords,
    })
}

fn build_data_segment(content: &str, mode: Mode, charset: Charset) -> Result<Segment, QrError> {
    match mode {
        Mode::Numeric => Segment::make_numeric(content),
        Mode::Alphanumeric => Segment::make_alphanumeric(content),
        Mode::Byte => Segment::make_byte_in_charset(content, charset),
        Mode::Kanji => Segment::make_kanji(content),
        Mode::Eci => Err(QrError::InternalInvariant(
            "ECI is a header-only mode and cannot be chosen as a content mode".to_string(),
        )),
    }
}

/// Finds the smallest version at which `segments` fit the given error
/// correction level's data capacity. A plain per-version scan sidesteps the
/// header/char-count circularity directly, since `Segment::get_total_bits`
/// already recomputes each segment's character-count field width for the
/// version under test.
fn select_version(segments: &[Segment], ec_level: EcLevel) -> Result<Version, QrError> {
    for v in Version::MIN.value()..=Version::MAX.value() {
        let version = Version::new(v);
        let capacity_bits = tables::num_data_codewords(version, ec_level) * 8;
        if let Some(total_bits) = Segment::get_total_bits(segments, version) {
            if total_bits <= capacity_bits {
                return Ok(version);
            }
        }
    }
    let data_bits = Segment::get_total_bits(segments, Version::MAX).unwrap_or(usize::MAX);
    Err(QrError::CapacityExceeded {
        data_bits,
        capacity_bits: tables::num_data_codewords(Version::MAX, ec_level) * 8,
    })
}

/// Appends the terminator, byte-aligns, and fills the remainder with the
/// standard's alternating pad codewords `0xEC`/`0x11`, per JIS X 0510 §8.4.9.
fn terminate_and_pad(bits: &mut BitStream, capacity_bits: usize) -> Result<(), QrError> {
    if bits.size() > capacity_bits {
        return Err(QrError::InternalInvariant(format!(
            "assembled header+data ({} bits) exceeds capacity ({} bits) after version selection",
            bits.size(),
            capacity_bits
        )));
    }

    let terminator_bits = (capacity_bits - bits.size()).min(4);
    for _ in 0..terminator_bits {
        bits.append_bit(false);
    }
    while bits.size() % 8 != 0 {
        bits.append_bit(false);
    }

    let mut pad_byte: u32 = 0xEC;
    while bits.size() < capacity_bits {
        bits.append_bits(pad_byte, 8);
        pad_byte = if pad_byte == 0xEC { 0x11 } else { 0xEC };
    }

    if bits.size() != capacity_bits {
        return Err(QrError::InternalInvariant(
            "padded bit stream does not exactly match data capacity".to_string(),
        ));
    }
    Ok(())
}

/// Splits `data` into the version/level's Reed-Solomon blocks, computes each
/// block's EC codewords, and interleaves data then EC bytes column-major
/// across blocks, per JIS X 0510 §8.6.
fn interleave(data: &[u8], version: Version, ec_level: EcLevel) -> Result<Vec<u8>, QrError> {
    let blocks_info = EcBlocks::for_version_and_level(version, ec_level);
    let num_blocks = blocks_info.num_blocks;
    let block_ecc_len = blocks_info.ec_codewords_per_block;
    let raw_codewords = tables::num_raw_data_modules(version) / 8;

    let num_short_blocks = num_blocks - data.len() % num_blocks;
    let short_block_data_len = data.len() / num_blocks;

    let mut blocks: Vec<(Vec<u8>, Vec<u8>)> = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let block_data_len = if i < num_short_blocks {
            short_block_data_len
        } else {
            short_block_data_len + 1
        };
        let block_data = data[offset..offset + block_data_len].to_vec();
        offset += block_data_len;
        let ecc = reed_solomon::encode(&block_data, block_ecc_len);
        blocks.push((block_data, ecc));
    }
    if offset != data.len() {
        return Err(QrError::InternalInvariant(
            "reed-solomon block partition did not consume every data byte".to_string(),
        ));
    }

    let mut result = Vec::with_capacity(raw_codewords);
    let max_data_len = short_block_data_len + 1;
    for i in 0..max_data_len {
        for (block_data, _) in &blocks {
            if i < block_data.len() {
                result.push(block_data[i]);
            }
        }
    }
    for i in 0..block_ecc_len {
        for (_, ecc) in &blocks {
            result.push(ecc[i]);
        }
    }

    if result.len() != raw_codewords {
        return Err(QrError::InternalInvariant(format!(
            "interleaved length {} does not match raw codeword count {}",
            result.len(),
            raw_codewords
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn pick_smallest_version_that_fits_numeric_content() {
        let payload = assemble("1234567890", EcLevel::M, Charset::Utf8, None).unwrap();
        assert_eq!(payload.version, Version::new(1));
        assert_eq!(payload.mode, Mode::Numeric);
    }

    #[test]
    fn classify_alphanumeric_content() {
        let payload = assemble("HELLO WORLD", EcLevel::Q, Charset::Utf8, None).unwrap();
        assert_eq!(payload.mode, Mode::Alphanumeric);
        assert_eq!(payload.version, Version::new(1));
    }

    #[test]
    fn classify_lowercase_content_as_byte() {
        let payload = assemble("hello world", EcLevel::L, Charset::Utf8, None).unwrap();
        assert_eq!(payload.mode, Mode::Byte);
        assert_eq!(payload.version, Version::new(1));
    }

    #[test]
    fn forced_version_too_small_fails_with_capacity_exceeded() {
        let long_text = "A".repeat(200);
        let result = assemble(&long_text, EcLevel::H, Charset::Utf8, Some(Version::new(1)));
        assert!(matches!(result, Err(QrError::CapacityExceeded { .. })));
    }

    #[test]
    fn codewords_length_matches_raw_data_modules_for_the_chosen_version() {
        let payload = assemble("hello world", EcLevel::L, Charset::Utf8, None).unwrap();
        let expected = tables::num_raw_data_modules(payload.version) / 8;
        assert_eq!(payload.codewords.len(), expected);
    }

    #[test]
    fn huge_numeric_input_exceeding_version_40_fails() {
        let digits = "0".repeat(30000);
        let result = assemble(&digits, EcLevel::H, Charset::Utf8, None);
        assert!(matches!(result, Err(QrError::CapacityExceeded { .. })));
    }

    #[test]
    fn shift_jis_byte_content_gets_an_eci_prefix() {
        // Differing from the default charset (UTF-8) in Byte mode should add an
        // ECI header segment, which costs 12 extra bits (4 mode + 8 designator).
        let utf8_payload = assemble("abc", EcLevel::L, Charset::Utf8, None).unwrap();
        let latin1_payload = assemble("abc", EcLevel::L, Charset::Iso8859_1, None).unwrap();
        assert_eq!(utf8_payload.version, latin1_payload.version);
    }
}

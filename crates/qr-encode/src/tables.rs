//! Static per-version, per-error-correction-level capacity data fixed by
//! JIS X 0510:2004 / ISO/IEC 18004 Annex D (Table 9) and Annex E, plus the
//! BCH-encoded format/version information strings from Annex C.

use crate::ec_level::EcLevel;
use crate::version::Version;

// EC codewords per block, indexed [level ordinal][version]. Index 0 is unused
// padding so that `table[ver as usize]` lines up directly with version numbers.
pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

// Number of Reed-Solomon blocks, indexed the same way as above.
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// The Reed-Solomon block structure for one `(version, level)` pair: how many
/// EC codewords each block carries, and how many equal-size block groups there
/// are and how many data codewords each group's blocks carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlocks {
    pub ec_codewords_per_block: usize,
    pub num_blocks: usize,
}

fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: EcLevel) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

impl EcBlocks {
    pub fn for_version_and_level(ver: Version, ecl: EcLevel) -> Self {
        Self {
            ec_codewords_per_block: table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl),
            num_blocks: table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl),
        }
    }
}

/// Returns the number of data bits available for a QR Code of the given version
/// number, after excluding all function modules (finders, timing, alignment,
/// format/version info) but before excluding error correction codewords. This
/// may not be a multiple of 8, because the standard permits a few leftover
/// "remainder bits" at certain versions. Result is in the range [208, 29648].
pub fn num_raw_data_modules(ver: Version) -> usize {
    let v = usize::from(ver.value());
    let mut result: usize = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Returns the number of 8-bit data (non-EC) codewords available at the given
/// version and error correction level, with any leftover remainder bits discarded.
pub fn num_data_codewords(ver: Version, ecl: EcLevel) -> usize {
    let blocks = EcBlocks::for_version_and_level(ver, ecl);
    num_raw_data_modules(ver) / 8 - blocks.ec_codewords_per_block * blocks.num_blocks
}

/// Returns the ascending list of alignment pattern center coordinates (shared by
/// both axes) for the given version. Empty for version 1, which has none.
pub fn alignment_pattern_positions(ver: Version) -> Vec<i32> {
    let v = ver.value();
    if v == 1 {
        return vec![];
    }
    let num_align = i32::from(v) / 7 + 2;
    let step: i32 = if v == 32 {
        26
    } else {
        (i32::from(v) * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let size = ver.dimension();
    let mut result: Vec<i32> = (0..num_align - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

/// Computes the 15-bit BCH-encoded format information word for a given error
/// correction level and mask pattern (0..=7), XOR-masked per Annex C.
pub fn format_info_bits(ecl: EcLevel, mask: u8) -> u32 {
    let data = u32::from(ecl.format_bits()) << 3 | u32::from(mask);
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    (data << 10 | rem) ^ 0x5412
}

/// Computes the 18-bit BCH-encoded version information word for versions >= 7.
pub fn version_info_bits(ver: Version) -> u32 {
    let data = u32::from(ver.value());
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    data << 12 | rem
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn version_1_has_no_alignment_patterns() {
        assert!(alignment_pattern_positions(Version::new(1)).is_empty());
    }

    #[test]
    fn version_2_has_a_single_alignment_pattern_pair() {
        assert_eq!(alignment_pattern_positions(Version::new(2)), vec![6, 18]);
    }

    #[test]
    fn raw_data_modules_stay_within_standard_bounds() {
        for v in 1..=40u8 {
            let n = num_raw_data_modules(Version::new(v));
            assert!((208..=29648).contains(&n));
        }
    }

    #[test]
    fn format_info_fits_in_15_bits() {
        for mask in 0..8u8 {
            assert!(format_info_bits(EcLevel::M, mask) < (1 << 15));
        }
    }

    #[test]
    fn version_info_fits_in_18_bits() {
        assert!(version_info_bits(Version::new(40)) < (1 << 18));
    }

    #[test]
    fn ec_blocks_invariant_matches_data_and_raw_codewords() {
        for v in 1..=40u8 {
            for &ecl in &[EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H] {
                let ver = Version::new(v);
                let blocks = EcBlocks::for_version_and_level(ver, ecl);
                let raw = num_raw_data_modules(ver) / 8;
                let data = num_data_codewords(ver, ecl);
                assert_eq!(
                    raw,
                    data + blocks.ec_codewords_per_block * blocks.num_blocks
                );
            }
        }
    }
}

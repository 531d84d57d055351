//! Generates QR Code symbols from text content, turning a string plus an
//! error correction level into a rendered module matrix, conforming to
//! JIS X 0510:2004 / ISO/IEC 18004.
//!
//! # Features
//!
//! - All 40 versions (sizes) and all 4 error correction levels
//! - Automatic mode selection (Numeric, Alphanumeric, Byte, Kanji) and
//!   automatic version selection, or forced versions via [`Hints`]
//! - Automatic mask pattern evaluation across all 8 candidates
//! - Charset hints beyond UTF-8 (ISO-8859-1, Shift_JIS) via Extended Channel
//!   Interpretation segments
//! - Output format: a `Vec<Vec<bool>>` module grid; rendering to pixels or
//!   vector graphics is the caller's responsibility
//!
//! # Examples
//!
//! ```
//! use qr_encode::{encode, EcLevel, Hints};
//!
//! let qr = encode("Hello, world!", EcLevel::M, &Hints::default()).unwrap();
//! for row in &qr.matrix {
//!     for &dark in row {
//!         print!("{}", if dark { "##" } else { "  " });
//!     }
//!     println!();
//! }
//! ```
//!
//! Mid-level operation with a custom segment sequence and a forced mask:
//!
//! ```
//! use qr_encode::{encode_segments, EcLevel, Mask, Mode, Segment, Version};
//!
//! let segs = vec![Segment::make_numeric("3141592653589793238462643383").unwrap()];
//! let qr = encode_segments(segs, Mode::Numeric, EcLevel::H, Some(Version::new(5)), Some(Mask::new(2)))
//!     .unwrap();
//! ```

mod assembler;
mod bit_stream;
mod charset;
mod ec_level;
mod encoder;
mod error;
mod finder_penalty;
mod gf256;
mod mask;
mod matrix;
mod mode;
mod penalty;
mod reed_solomon;
mod segment;
mod tables;
mod version;

pub use charset::Charset;
pub use ec_level::EcLevel;
pub use encoder::{encode, encode_segments, Hints, QrCode};
pub use error::QrError;
pub use mask::Mask;
pub use mode::Mode;
pub use segment::Segment;
pub use version::Version;

use std::sync::OnceLock;

/// The field GF(2^8) used throughout the QR Code standard, built on the
/// primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x011D).
///
/// `exp` is folded so that `exp[i] == exp[i % 255]` for `i` up to 511, which lets
/// callers add two exponents without reducing mod 255 themselves. `log` has no
/// entry for 0 (the discrete log of zero is undefined); index 0 is unused filler.
struct Tables {
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u32 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= 0x11D;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// Returns `alpha^power`, where `alpha` is the field's generator (2).
/// Accepts any `power` in `0..512` thanks to the folded table.
pub fn exp(power: usize) -> u8 {
    tables().exp[power]
}

/// Returns the discrete log of `value` base `alpha`. Panics if `value == 0`.
pub fn log(value: u8) -> u8 {
    assert!(value != 0, "log of zero is undefined in GF(256)");
    tables().log[value as usize]
}

/// Multiplies two field elements.
pub fn multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        0
    } else {
        exp(log(a) as usize + log(b) as usize)
    }
}

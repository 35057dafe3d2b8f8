//! Width-generic byte ordering and sign reconstruction.
//!
//! Every codec in the crate funnels through these three functions. `N` is the
//! width in bytes; values travel as the low `N * 8` bits of a `u64`.
//!
//! Supported widths are 1 to 8 bytes. Any other `N` fails to build.

use crate::Endian;

/// Rejects widths that do not fit the `u64` working value.
macro_rules! assert_width {
    ($n:expr) => {
        const { assert!($n >= 1 && $n <= 8, "integer width must be 1 to 8 bytes") }
    };
}

/// Splits the low `N * 8` bits of `bits` into bytes. Higher bits are dropped.
#[inline]
pub fn pack<const N: usize>(bits: u64, endian: Endian) -> [u8; N] {
    assert_width!(N);
    let mut out = [0u8; N];

    for (k, byte) in out.iter_mut().enumerate() {
        let shift = match endian {
            Endian::Big => 8 * (N - 1 - k),
            Endian::Little => 8 * k,
        };
        *byte = ((bits >> shift) & 0xff) as u8;
    }

    out
}

/// Accumulates `N` bytes into an unsigned value in `[0, 2^(N*8) - 1]`.
#[inline]
pub fn unpack<const N: usize>(bytes: &[u8; N], endian: Endian) -> u64 {
    assert_width!(N);
    let mut value = 0u64;

    match endian {
        Endian::Big => {
            for &byte in bytes.iter() {
                value = (value << 8) | byte as u64;
            }
        }
        Endian::Little => {
            for &byte in bytes.iter().rev() {
                value = (value << 8) | byte as u64;
            }
        }
    }

    value
}

/// Reinterprets an unsigned `N * 8` bit pattern as two's complement.
#[inline]
pub fn sign_extend<const N: usize>(bits: u64) -> i64 {
    assert_width!(N);
    let width = 8 * N as u32;
    let unsigned = bits as i128;

    // i128 so that 2^64 is representable for the 8-byte width
    if unsigned >= 1i128 << (width - 1) {
        (unsigned - (1i128 << width)) as i64
    } else {
        unsigned as i64
    }
}

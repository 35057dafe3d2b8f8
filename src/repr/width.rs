use core::fmt::Debug;

use crate::{codec, Endian, Error, PositionedBuffer, PositionedBufferMut};

pub(super) mod sealed {
    pub trait Sealed {}
}

#[inline]
fn too_small<const N: usize>(got: usize) -> Error {
    log::trace!("rejecting {} byte array for {} byte integer", got, N);
    Error::BufferTooSmall { expected: N, got }
}

/// An integer encoding occupying exactly `N` bytes.
///
/// Implementors only describe how their value maps to and from an `N * 8` bit
/// pattern; every calling convention is provided on top of that.
///
/// Packing never range checks: bits of the value above the width are
/// dropped. Array based operations fail with [`Error::BufferTooSmall`] before
/// touching the array. Buffer based operations leave bounds to the buffer.
///
/// The trait is sealed: only the widths this crate ships, 1 to 8 bytes, can
/// implement it.
///
/// ```compile_fail
/// use jintegers::FixedWidth;
///
/// struct Integer72;
///
/// impl FixedWidth<9> for Integer72 {
///     type Value = u128;
///
///     const SIGNED: bool = false;
///     const MIN: u128 = 0;
///     const MAX: u128 = (1 << 72) - 1;
///
///     fn to_bits(value: u128) -> u64 {
///         value as u64
///     }
///
///     fn from_bits(bits: u64) -> u128 {
///         bits as u128
///     }
/// }
/// ```
pub trait FixedWidth<const N: usize>: sealed::Sealed {
    type Value: Copy + Debug + PartialEq;

    const SIZE: usize = N;
    const BITS: u32 = 8 * N as u32;
    const SIGNED: bool;
    const MIN: Self::Value;
    const MAX: Self::Value;

    /// Two's complement bit pattern of `value`; only the low `BITS` bits are kept.
    fn to_bits(value: Self::Value) -> u64;
    /// Rebuilds a value from an unsigned `BITS` bit pattern.
    fn from_bits(bits: u64) -> Self::Value;

    /// Strategy over every representable value of this width.
    #[cfg(any(test, feature = "proptest"))]
    fn value_strategy() -> proptest::strategy::BoxedStrategy<Self::Value>;

    #[inline]
    fn pack(value: Self::Value, endian: Endian) -> [u8; N] {
        codec::pack(Self::to_bits(value), endian)
    }

    #[inline(always)]
    fn pack_big_endian(value: Self::Value) -> [u8; N] {
        Self::pack(value, Endian::Big)
    }

    #[inline(always)]
    fn pack_little_endian(value: Self::Value) -> [u8; N] {
        Self::pack(value, Endian::Little)
    }

    /// Writes `value` into `out[..N]`, returning `out`.
    #[inline]
    fn pack_to(value: Self::Value, endian: Endian, out: &mut [u8]) -> Result<&mut [u8], Error> {
        let got = out.len();
        let Some(dst) = out.first_chunk_mut::<N>() else {
            return Err(too_small::<N>(got));
        };

        *dst = Self::pack(value, endian);
        Ok(out)
    }

    #[inline(always)]
    fn pack_big_endian_to(value: Self::Value, out: &mut [u8]) -> Result<&mut [u8], Error> {
        Self::pack_to(value, Endian::Big, out)
    }

    #[inline(always)]
    fn pack_little_endian_to(value: Self::Value, out: &mut [u8]) -> Result<&mut [u8], Error> {
        Self::pack_to(value, Endian::Little, out)
    }

    /// Writes `value` at `offset..offset + N` of `buffer`, returning `buffer`.
    #[inline]
    fn pack_ordered_to_buffer<B: PositionedBufferMut>(
        value: Self::Value,
        endian: Endian,
        buffer: &mut B,
        offset: usize,
    ) -> Result<&mut B, Error> {
        let window = buffer.window_mut(offset, N)?;
        let got = window.len();
        let Some(dst) = window.first_chunk_mut::<N>() else {
            return Err(too_small::<N>(got));
        };

        *dst = Self::pack(value, endian);
        Ok(buffer)
    }

    #[inline(always)]
    fn pack_big_endian_to_buffer<B: PositionedBufferMut>(
        value: Self::Value,
        buffer: &mut B,
        offset: usize,
    ) -> Result<&mut B, Error> {
        Self::pack_ordered_to_buffer(value, Endian::Big, buffer, offset)
    }

    #[inline(always)]
    fn pack_little_endian_to_buffer<B: PositionedBufferMut>(
        value: Self::Value,
        buffer: &mut B,
        offset: usize,
    ) -> Result<&mut B, Error> {
        Self::pack_ordered_to_buffer(value, Endian::Little, buffer, offset)
    }

    /// Like [`FixedWidth::pack_ordered_to_buffer`] using the buffer's own order.
    #[inline]
    fn pack_to_buffer<B: PositionedBufferMut>(
        value: Self::Value,
        buffer: &mut B,
        offset: usize,
    ) -> Result<&mut B, Error> {
        let endian = buffer.order();
        Self::pack_ordered_to_buffer(value, endian, buffer, offset)
    }

    /// Reads a value from `input[..N]`.
    #[inline]
    fn unpack(input: &[u8], endian: Endian) -> Result<Self::Value, Error> {
        let bytes = input
            .first_chunk::<N>()
            .ok_or_else(|| too_small::<N>(input.len()))?;

        Ok(Self::from_bits(codec::unpack(bytes, endian)))
    }

    #[inline(always)]
    fn unpack_big_endian(input: &[u8]) -> Result<Self::Value, Error> {
        Self::unpack(input, Endian::Big)
    }

    #[inline(always)]
    fn unpack_little_endian(input: &[u8]) -> Result<Self::Value, Error> {
        Self::unpack(input, Endian::Little)
    }

    #[inline]
    fn unpack_ordered_from_buffer<B: PositionedBuffer>(
        buffer: &B,
        endian: Endian,
        offset: usize,
    ) -> Result<Self::Value, Error> {
        Self::unpack(buffer.window(offset, N)?, endian)
    }

    #[inline(always)]
    fn unpack_big_endian_from_buffer<B: PositionedBuffer>(
        buffer: &B,
        offset: usize,
    ) -> Result<Self::Value, Error> {
        Self::unpack_ordered_from_buffer(buffer, Endian::Big, offset)
    }

    #[inline(always)]
    fn unpack_little_endian_from_buffer<B: PositionedBuffer>(
        buffer: &B,
        offset: usize,
    ) -> Result<Self::Value, Error> {
        Self::unpack_ordered_from_buffer(buffer, Endian::Little, offset)
    }

    #[inline]
    fn unpack_from_buffer<B: PositionedBuffer>(
        buffer: &B,
        offset: usize,
    ) -> Result<Self::Value, Error> {
        Self::unpack_ordered_from_buffer(buffer, buffer.order(), offset)
    }
}

//! Packing and unpacking of fixed-width integers in big or little endian
//! byte order, for 8, 16, 24, 32, 48 and 64 bit widths.
//!
//! ```
//! use jintegers::{ByteBuffer, Endian, FixedWidth, Integer24, Signed24};
//!
//! let packed = Integer24::pack_big_endian(0xff_ffff);
//! assert_eq!(packed, [0xff, 0xff, 0xff]);
//! assert_eq!(Signed24::unpack_big_endian(&packed).unwrap(), -1);
//!
//! let mut buf = ByteBuffer::with_order([0u8; 8], Endian::Little);
//! Integer24::pack_to_buffer(0x123456, &mut buf, 2).unwrap();
//! assert_eq!(buf.get_ref(), &[0, 0, 0x56, 0x34, 0x12, 0, 0, 0]);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod buffer;
mod codec;
mod endian;
mod error;
mod repr;

pub use self::{
    buffer::{ByteBuffer, PositionedBuffer, PositionedBufferMut},
    endian::Endian,
    error::Error,
    repr::*,
};

use core::{fmt, ops::Range};

use crate::{Endian, Error};

/// Random-access byte storage that carries its own byte order.
///
/// Bounds are enforced here rather than by the codecs: a window is either
/// handed out whole or refused, so nothing is read or written on failure.
pub trait PositionedBuffer {
    fn order(&self) -> Endian;
    fn capacity(&self) -> usize;
    fn window(&self, offset: usize, len: usize) -> Result<&[u8], Error>;
}

pub trait PositionedBufferMut: PositionedBuffer {
    fn window_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], Error>;
}

#[inline]
fn check_window(offset: usize, len: usize, capacity: usize) -> Result<Range<usize>, Error> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(offset..end),
        _ => {
            log::trace!("rejecting window of {len} bytes at {offset}, capacity is {capacity}");
            Err(Error::OutOfBounds {
                offset,
                len,
                capacity,
            })
        }
    }
}

/// Byte storage paired with a declared byte order.
///
/// New buffers are big endian, matching network order.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteBuffer<B> {
    inner: B,
    order: Endian,
}

impl<B: AsRef<[u8]>> ByteBuffer<B> {
    pub fn new(inner: B) -> Self {
        Self::with_order(inner, Endian::Big)
    }

    pub fn with_order(inner: B, order: Endian) -> Self {
        Self { inner, order }
    }

    pub fn set_order(&mut self, order: Endian) -> &mut Self {
        self.order = order;
        self
    }

    pub fn get_ref(&self) -> &B {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: AsRef<[u8]>> PositionedBuffer for ByteBuffer<B> {
    #[inline(always)]
    fn order(&self) -> Endian {
        self.order
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.inner.as_ref().len()
    }

    #[inline]
    fn window(&self, offset: usize, len: usize) -> Result<&[u8], Error> {
        let range = check_window(offset, len, self.capacity())?;
        Ok(&self.inner.as_ref()[range])
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PositionedBufferMut for ByteBuffer<B> {
    #[inline]
    fn window_mut(&mut self, offset: usize, len: usize) -> Result<&mut [u8], Error> {
        let range = check_window(offset, len, self.capacity())?;
        Ok(&mut self.inner.as_mut()[range])
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for ByteBuffer<B> {
    fn as_ref(&self) -> &[u8] {
        self.inner.as_ref()
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for ByteBuffer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteBuffer<{:?}>({:02x?})", self.order, self.inner.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_defaults_to_big_endian() {
        let buf = ByteBuffer::new([0u8; 4]);
        assert_eq!(buf.order(), Endian::Big);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_set_order() {
        let mut buf = ByteBuffer::new(vec![0u8; 4]);
        buf.set_order(Endian::Little);
        assert_eq!(buf.order(), Endian::Little);
    }

    #[test]
    fn test_window_bounds() {
        let mut buf = ByteBuffer::new([1u8, 2, 3, 4]);
        assert_eq!(buf.window(1, 2).unwrap(), &[2, 3]);
        assert_eq!(buf.window(4, 0).unwrap(), &[] as &[u8]);
        assert_eq!(
            buf.window(3, 2),
            Err(Error::OutOfBounds {
                offset: 3,
                len: 2,
                capacity: 4
            })
        );
        assert!(buf.window_mut(usize::MAX, 2).is_err());
        buf.window_mut(2, 2).unwrap().copy_from_slice(&[9, 9]);
        assert_eq!(buf.into_inner(), [1, 2, 9, 9]);
    }

    #[test]
    fn test_borrowed_storage() {
        let mut storage = [0u8; 3];
        let mut buf = ByteBuffer::with_order(&mut storage[..], Endian::Little);
        buf.window_mut(0, 1).unwrap()[0] = 0xaa;
        assert_eq!(storage, [0xaa, 0, 0]);
    }
}

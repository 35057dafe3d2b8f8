use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte array is shorter than the width being packed or unpacked.
    BufferTooSmall { expected: usize, got: usize },
    /// A positioned buffer was asked for bytes past its capacity.
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { expected, got } => {
                write!(f, "BufferTooSmall({got} < {expected})")
            }
            Error::OutOfBounds {
                offset,
                len,
                capacity,
            } => write!(f, "OutOfBounds({offset}+{len} > {capacity})"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { expected, got } => {
                write!(f, "Buffer length must be >= {expected} (is {got})")
            }
            Error::OutOfBounds {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "Index out of bounds: {len} bytes at offset {offset} exceed capacity {capacity}"
            ),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::BufferTooSmall {
                expected: 3,
                got: 2
            }
            .to_string(),
            "Buffer length must be >= 3 (is 2)"
        );
        assert_eq!(
            Error::OutOfBounds {
                offset: 7,
                len: 2,
                capacity: 8
            }
            .to_string(),
            "Index out of bounds: 2 bytes at offset 7 exceed capacity 8"
        );
    }

    #[test]
    fn test_debug() {
        let e = Error::BufferTooSmall {
            expected: 2,
            got: 0,
        };
        assert_eq!(alloc::format!("{e:?}"), "BufferTooSmall(0 < 2)");
    }
}

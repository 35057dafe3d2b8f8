/// Byte order of a packed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Endian::Big;
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Endian::Little;

    /// Network byte order.
    pub const NETWORK: Self = Endian::Big;

    #[inline(always)]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::NETWORK
    }
}

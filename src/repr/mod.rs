mod width;

pub use self::width::FixedWidth;
use self::width::sealed::Sealed;
use crate::codec;

macro_rules! impl_fixed_width {
    ($bits:literal, $unsigned:ty, $signed:ty) => {
        paste::paste! {
            #[doc = concat!("Packing for unsigned ", stringify!($bits), "-bit integers.")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct [<Integer $bits>];

            #[doc = concat!("Packing for two's complement ", stringify!($bits), "-bit integers.")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct [<Signed $bits>];

            impl Sealed for [<Integer $bits>] {}
            impl Sealed for [<Signed $bits>] {}

            impl FixedWidth<{ $bits / 8 }> for [<Integer $bits>] {
                type Value = $unsigned;

                const SIGNED: bool = false;
                const MIN: $unsigned = 0;
                const MAX: $unsigned = (u64::MAX >> (64 - $bits)) as $unsigned;

                #[inline(always)]
                fn to_bits(value: $unsigned) -> u64 {
                    value as u64
                }

                #[inline(always)]
                fn from_bits(bits: u64) -> $unsigned {
                    bits as $unsigned
                }

                #[cfg(any(test, feature = "proptest"))]
                fn value_strategy() -> proptest::strategy::BoxedStrategy<$unsigned> {
                    use proptest::strategy::Strategy;
                    (Self::MIN..=Self::MAX).boxed()
                }
            }

            impl FixedWidth<{ $bits / 8 }> for [<Signed $bits>] {
                type Value = $signed;

                const SIGNED: bool = true;
                const MIN: $signed = (-(1i128 << ($bits - 1))) as $signed;
                const MAX: $signed = ((1i128 << ($bits - 1)) - 1) as $signed;

                #[inline(always)]
                fn to_bits(value: $signed) -> u64 {
                    value as i64 as u64
                }

                #[inline(always)]
                fn from_bits(bits: u64) -> $signed {
                    codec::sign_extend::<{ $bits / 8 }>(bits) as $signed
                }

                #[cfg(any(test, feature = "proptest"))]
                fn value_strategy() -> proptest::strategy::BoxedStrategy<$signed> {
                    use proptest::strategy::Strategy;
                    (Self::MIN..=Self::MAX).boxed()
                }
            }
        }
    };
}

impl_fixed_width!(8, u32, i32);
impl_fixed_width!(16, u32, i32);
impl_fixed_width!(24, u32, i32);
impl_fixed_width!(32, u32, i32);
impl_fixed_width!(48, u64, i64);
impl_fixed_width!(64, u64, i64);

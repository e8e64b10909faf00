//! Bit-range helpers for the packed tile record.
//!
//! Every accessor in `map` and `rail` is built on these: `gb` reads a field,
//! `sb` overwrites exactly that field and nothing else.

pub trait Bits: Copy {
    /// All-ones value `len` bits wide.
    fn field_mask(len: u32) -> Self;
    /// Read `len` bits starting at bit `start`.
    fn gb(self, start: u32, len: u32) -> Self;
    /// Overwrite `len` bits starting at bit `start` with the low bits of `value`.
    fn sb(&mut self, start: u32, len: u32, value: Self);
    fn has_bit(self, n: u32) -> bool;
    fn set_bit(&mut self, n: u32);
    fn clr_bit(&mut self, n: u32);
}

macro_rules! impl_bits {
    ($($t:ty),*) => {
        $(
            impl Bits for $t {
                #[inline]
                fn field_mask(len: u32) -> Self {
                    if len >= <$t>::BITS {
                        <$t>::MAX
                    } else {
                        (1 << len) - 1
                    }
                }

                #[inline]
                fn gb(self, start: u32, len: u32) -> Self {
                    (self >> start) & Self::field_mask(len)
                }

                #[inline]
                fn sb(&mut self, start: u32, len: u32, value: Self) {
                    let mask = Self::field_mask(len) << start;
                    *self = (*self & !mask) | ((value << start) & mask);
                }

                #[inline]
                fn has_bit(self, n: u32) -> bool {
                    self & (1 << n) != 0
                }

                #[inline]
                fn set_bit(&mut self, n: u32) {
                    *self |= 1 << n;
                }

                #[inline]
                fn clr_bit(&mut self, n: u32) {
                    *self &= !(1 << n);
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32);

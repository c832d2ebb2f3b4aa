//! Fixed-width posit types on the standard format ladder.
//!
//! Each type pins one `(es, nbits)` pair and delegates every operation
//! to the engine in [`crate::posit`], swapping the engine's 64-bit
//! integer conversions for ones sized to the format. [`Posit64`]
//! promotions land in the partial [`Posit128`] type, which exposes
//! just enough surface to decompose a promoted result.

use rug::Integer;

use crate::posit::{Posit, PositContext};

macro_rules! posit_format {
    ($name:ident, $nbits:expr, $es:expr, $int:ty, $uint:ty, $promote:ident) => {
        #[doc = concat!(
            "A ", stringify!($nbits), "-bit posit with ",
            stringify!($es), " exponent bits."
        )]
        #[derive(Clone, Debug)]
        pub struct $name(Posit);

        impl $name {
            /// Constructs a zero-valued posit of this format.
            pub fn new() -> Self {
                $name(Self::context().zero())
            }

            /// The engine context for this format.
            pub fn context() -> PositContext {
                PositContext::new($es, $nbits)
            }

            pub(crate) fn wrap(p: Posit) -> Self {
                debug_assert_eq!(p.ctx().nbits(), $nbits);
                $name(p)
            }

            /// Borrows the engine-level value.
            pub fn as_posit(&self) -> &Posit {
                &self.0
            }

            /// Constructs a posit from a raw bit pattern.
            pub fn from_bits(bits: $uint) -> Self {
                $name(Self::context().from_bits(Integer::from(bits)))
            }

            /// Constructs a posit from a signed integer.
            pub fn from_int(i: $int) -> Self {
                $name(Self::context().from_int(i as i64))
            }

            /// Constructs a posit from an unsigned integer.
            pub fn from_uint(u: $uint) -> Self {
                $name(Self::context().from_uint(u as u64))
            }

            /// The raw bit pattern.
            pub fn bits(&self) -> $uint {
                self.0.to_u64_raw() as $uint
            }

            /// Returns true if this posit is NaR.
            pub fn is_nar(&self) -> bool {
                self.0.is_nar()
            }

            /// Returns true if this posit is zero.
            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// The negated value (two's complement of the pattern).
            pub fn neg(&self) -> $name {
                $name(self.0.neg())
            }

            /// `self + x`, rounded to nearest even.
            pub fn add(&self, x: &$name) -> $name {
                $name(self.0.add(&x.0))
            }

            /// The exact sum as a `(truncated, residual)` pair; the
            /// two components reconstruct the sum exactly.
            pub fn add_exact(&self, x: &$name) -> ($name, $name) {
                let (hi, lo) = self.0.add_exact(&x.0);
                ($name(hi), $name(lo))
            }

            /// `self - x`, rounded to nearest even.
            pub fn sub(&self, x: &$name) -> $name {
                $name(self.0.sub(&x.0))
            }

            /// The exact difference as a `(truncated, residual)` pair.
            pub fn sub_exact(&self, x: &$name) -> ($name, $name) {
                let (hi, lo) = self.0.sub_exact(&x.0);
                ($name(hi), $name(lo))
            }

            /// `self * x`, rounded to nearest even.
            pub fn mul(&self, x: &$name) -> $name {
                $name(self.0.mul(&x.0))
            }

            #[doc = concat!(
                "`self * x` in the next larger format, as a [`",
                stringify!($promote), "`]; never rounds."
            )]
            pub fn mul_promote(&self, x: &$name) -> $promote {
                $promote::wrap(self.0.mul_promote(&x.0))
            }

            /// `self / x`, rounded to nearest even.
            pub fn div(&self, x: &$name) -> $name {
                $name(self.0.div(&x.0))
            }

            #[doc = concat!(
                "`self / x` in the next larger format, as a [`",
                stringify!($promote), "`]."
            )]
            pub fn div_promote(&self, x: &$name) -> $promote {
                $promote::wrap(self.0.div_promote(&x.0))
            }

            /// Square root; NaR for negative inputs.
            pub fn sqrt(&self) -> $name {
                $name(self.0.sqrt())
            }

            /// The value rounded to a signed integer, clamped to the
            /// format's integer width.
            pub fn to_int(&self) -> $int {
                let x = self.0.to_int();
                let max = <$int>::MAX as i64;
                if x > max {
                    <$int>::MAX
                } else if x < -max {
                    -<$int>::MAX
                } else {
                    x as $int
                }
            }

            /// The value rounded through the signed conversion and
            /// recast unsigned: results above the format's unsigned
            /// maximum clamp to it, negative results wrap as the raw
            /// cast of the signed value.
            pub fn to_uint(&self) -> $uint {
                let x = self.0.to_int();
                if x > 0 && x as u64 > <$uint>::MAX as u64 {
                    return <$uint>::MAX;
                }
                x as $uint
            }

            /// The exponent `z` for which
            /// `0.5 * 2^z <= |value| < 2^z`.
            pub fn exp(&self) -> $int {
                let x = self.0.exp() as i64;
                assert!(
                    x <= <$int>::MAX as i64 && x >= -(<$int>::MAX as i64),
                    "posit exponent does not fit the format's integer width"
                );
                x as $int
            }

            /// The significand as a posit in `[1/2, 1)`; zero and NaR
            /// pass through.
            pub fn mant(&self) -> $name {
                $name(self.0.mant())
            }

            /// Multiplies by `2^x` by adjusting the exponent.
            pub fn exp_add(&self, x: $int) -> $name {
                $name(self.0.exp_add(x as i32))
            }

            #[doc = concat!(
                "Casts up the ladder to [`", stringify!($promote),
                "`]; always exact."
            )]
            pub fn up(&self) -> $promote {
                $promote::wrap(self.0.up())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

macro_rules! posit_downcast {
    ($name:ident, $down:ident) => {
        impl $name {
            #[doc = concat!(
                "Casts down the ladder to [`", stringify!($down),
                "`]; may round."
            )]
            pub fn down(&self) -> $down {
                $down::wrap(self.0.down())
            }
        }
    };
}

posit_format!(Posit8, 8, 0, i8, u8, Posit16);
posit_format!(Posit16, 16, 1, i16, u16, Posit32);
posit_format!(Posit32, 32, 2, i32, u32, Posit64);
posit_format!(Posit64, 64, 3, i64, u64, Posit128);

posit_downcast!(Posit16, Posit8);
posit_downcast!(Posit32, Posit16);
posit_downcast!(Posit64, Posit32);

/// A 128-bit posit with 4 exponent bits: the landing format for
/// [`Posit64`] promotions. Exposes only what is needed to break a
/// promoted result back down.
#[derive(Clone, Debug)]
pub struct Posit128(Posit);

impl Posit128 {
    /// The engine context for this format.
    pub fn context() -> PositContext {
        PositContext::new(4, 128)
    }

    pub(crate) fn wrap(p: Posit) -> Self {
        debug_assert_eq!(p.ctx().nbits(), 128);
        Posit128(p)
    }

    /// Borrows the engine-level value.
    pub fn as_posit(&self) -> &Posit {
        &self.0
    }

    /// The exponent `z` for which `0.5 * 2^z <= |value| < 2^z`.
    pub fn exp(&self) -> i32 {
        self.0.exp()
    }

    /// The significand as a posit in `[1/2, 1)`; zero and NaR pass
    /// through.
    pub fn mant(&self) -> Posit128 {
        Posit128(self.0.mant())
    }
}

posit_downcast!(Posit128, Posit64);

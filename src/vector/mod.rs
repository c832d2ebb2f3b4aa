//! Short fixed-length vectors of posits.
//!
//! Each vector is a value-typed array of one fixed-width posit type,
//! and every operation is the scalar operation broadcast lane by lane.

use std::array::from_fn;

use crate::fixed::{Posit16, Posit8};

macro_rules! posit_vector {
    ($name:ident, $elem:ident, $len:expr, $int:ty, $uint:ty) => {
        #[doc = concat!(
            "A ", stringify!($len), "-lane vector of [`",
            stringify!($elem), "`]."
        )]
        #[derive(Clone, Debug)]
        pub struct $name([$elem; $len]);

        impl $name {
            /// Broadcasts one value across every lane.
            pub fn splat(a: $elem) -> Self {
                $name(from_fn(|_| a.clone()))
            }

            /// Builds a vector from one signed integer per lane.
            pub fn from_int(x: [$int; $len]) -> Self {
                $name(from_fn(|i| $elem::from_int(x[i])))
            }

            /// Builds a vector from one unsigned integer per lane.
            pub fn from_uint(x: [$uint; $len]) -> Self {
                $name(from_fn(|i| $elem::from_uint(x[i])))
            }

            /// Borrows one lane.
            pub fn get(&self, i: usize) -> &$elem {
                &self.0[i]
            }

            /// Replaces one lane.
            pub fn put(&mut self, i: usize, x: $elem) {
                self.0[i] = x;
            }

            /// Lane-wise sum.
            pub fn add(&self, x: &$name) -> $name {
                $name(from_fn(|i| self.0[i].add(&x.0[i])))
            }

            /// Lane-wise exact sum: a vector of truncated sums and a
            /// vector of residuals.
            pub fn add_exact(&self, x: &$name) -> ($name, $name) {
                let pairs: [($elem, $elem); $len] =
                    from_fn(|i| self.0[i].add_exact(&x.0[i]));
                let hi = $name(from_fn(|i| pairs[i].0.clone()));
                let lo = $name(from_fn(|i| pairs[i].1.clone()));
                (hi, lo)
            }

            /// Lane-wise difference.
            pub fn sub(&self, x: &$name) -> $name {
                $name(from_fn(|i| self.0[i].sub(&x.0[i])))
            }

            /// Lane-wise exact difference: a vector of truncated
            /// differences and a vector of residuals.
            pub fn sub_exact(&self, x: &$name) -> ($name, $name) {
                let pairs: [($elem, $elem); $len] =
                    from_fn(|i| self.0[i].sub_exact(&x.0[i]));
                let hi = $name(from_fn(|i| pairs[i].0.clone()));
                let lo = $name(from_fn(|i| pairs[i].1.clone()));
                (hi, lo)
            }

            /// Lane-wise product.
            pub fn mul(&self, x: &$name) -> $name {
                $name(from_fn(|i| self.0[i].mul(&x.0[i])))
            }

            /// Lane-wise quotient.
            pub fn div(&self, x: &$name) -> $name {
                $name(from_fn(|i| self.0[i].div(&x.0[i])))
            }

            /// Lane-wise square root.
            pub fn sqrt(&self) -> $name {
                $name(from_fn(|i| self.0[i].sqrt()))
            }

            /// Lane-wise rounding to signed integers.
            pub fn to_int(&self) -> [$int; $len] {
                from_fn(|i| self.0[i].to_int())
            }

            /// Lane-wise rounding to unsigned integers.
            pub fn to_uint(&self) -> [$uint; $len] {
                from_fn(|i| self.0[i].to_uint())
            }

            /// Lane-wise exponents.
            pub fn exp(&self) -> [$int; $len] {
                from_fn(|i| self.0[i].exp())
            }

            /// Lane-wise exponent adjustment (multiplication by
            /// `2^x[i]`).
            pub fn exp_add(&self, x: [$int; $len]) -> $name {
                $name(from_fn(|i| self.0[i].exp_add(x[i])))
            }

            /// Lane-wise raw bit patterns.
            pub fn bits(&self) -> [$uint; $len] {
                from_fn(|i| self.0[i].bits())
            }
        }
    };
}

posit_vector!(Posit8x4, Posit8, 4, i8, u8);
posit_vector!(Posit16x2, Posit16, 2, i16, u16);

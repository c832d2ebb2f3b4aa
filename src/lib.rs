/*!
`positnum` implements the posit number format: a tapered-precision
alternative to IEEE 754 floating-point, parameterized by total bitwidth
`nbits` and exponent field size `es`.

The core of the library is [`PositContext`], an engine for a single
`(es, nbits)` format. It decodes posit bit patterns into
arbitrary-precision reals ([`rug::Float`], backed by MPFR) and encodes
reals back into bit patterns under round-to-nearest, ties to even.
All arithmetic is built on that pair of conversions: operands are
decoded, the operation is performed in the real domain at working
precision, and the result is re-encoded. Posit values themselves are
immutable bit patterns represented by [`Posit`].

Besides the usual operations (add, sub, mul, div, sqrt), the engine
provides *exact* sums and differences (a truncated result plus a
residual posit that together reconstruct the working-precision value)
and *promoted* products and quotients landing in the next larger format
`(2 * nbits, es + 1)`.

The [`fixed`] module fixes the standard format ladder as the wrapper
types [`Posit8`] through [`Posit64`] (plus a partial [`Posit128`] as
the landing type for 64-bit promotions), and the [`vector`] module
broadcasts the scalar operations across short fixed-length lanes.
*/

pub mod fixed;
pub mod posit;
pub mod vector;

mod util;

pub use crate::fixed::{Posit128, Posit16, Posit32, Posit64, Posit8};
pub use crate::posit::{Posit, PositContext};
pub use crate::vector::{Posit16x2, Posit8x4};

//! Posit numbers of any format `(es, nbits)`.
//!
//! This module implements the posit engine. The format parameters live
//! in [`PositContext`]; the associated storage type is [`Posit`], an
//! immutable `nbits`-wide bit pattern. [`PositContext`] converts
//! between bit patterns and MPFR reals and performs all rounding;
//! arithmetic on [`Posit`] values is decode, real-domain computation,
//! re-encode.

mod number;
mod ops;
mod round;

pub use number::Posit;
pub use round::PositContext;

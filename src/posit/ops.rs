// posit/ops.rs
//
// Arithmetic and conversions. Every operation decodes to MPFR reals,
// computes at working precision, and re-encodes.
//

use rug::float::Round;
use rug::Float;

use super::{Posit, PositContext};

impl PositContext {
    /// Constructs a posit from a signed integer, rounding to nearest.
    pub fn from_int(&self, i: i64) -> Posit {
        self.round(&Float::with_val(64, i))
    }

    /// Constructs a posit from an unsigned integer, rounding to
    /// nearest.
    pub fn from_uint(&self, u: u64) -> Posit {
        self.round(&Float::with_val(64, u))
    }

    /// Sum with residual: rounds `x + y` toward negative infinity into
    /// this format, then encodes what was lost as a second posit. The
    /// two results add back to the working-precision sum exactly; a
    /// residual that does not encode exactly is a broken invariant.
    fn split_exact(&self, x: &Float, y: &Float) -> (Posit, Posit) {
        let p = self.working_prec();
        let (z, _) = Float::with_val_round(p, x + y, Round::Down);
        if z.is_infinite() || z.is_nan() {
            return (self.nar(), self.nar());
        }
        let (trunc, _) = self.encode(&z, true);
        let zt = trunc.to_float();
        let residual = Float::with_val(p, &z - &zt);
        let (rest, exact) = self.encode(&residual, false);
        assert!(exact, "residual of an exact sum did not encode exactly");
        (trunc, rest)
    }
}

impl Posit {
    /// `self + other`, rounded to nearest even.
    pub fn add(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), other.to_float());
        let sum = Float::with_val(self.ctx.working_prec(), &xf + &yf);
        self.ctx.round(&sum)
    }

    /// `self - other`, rounded to nearest even.
    pub fn sub(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), other.to_float());
        let diff = Float::with_val(self.ctx.working_prec(), &xf - &yf);
        self.ctx.round(&diff)
    }

    /// `self * other`, rounded to nearest even.
    pub fn mul(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), other.to_float());
        let prod = Float::with_val(self.ctx.working_prec(), &xf * &yf);
        self.ctx.round(&prod)
    }

    /// `self / other`, rounded to nearest even. Division by zero
    /// produces NaR.
    pub fn div(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), other.to_float());
        let quot = Float::with_val(self.ctx.working_prec(), &xf / &yf);
        self.ctx.round(&quot)
    }

    /// Square root, rounded to nearest even. Negative inputs produce
    /// NaR.
    pub fn sqrt(&self) -> Posit {
        let xf = self.to_float();
        let root = Float::with_val(self.ctx.working_prec(), xf.sqrt_ref());
        self.ctx.round(&root)
    }

    /// The exact sum of two posits as a `(truncated, residual)` pair:
    /// the first component is the sum truncated into this format, and
    /// `truncated + residual` reconstructs the working-precision sum
    /// exactly in the real domain.
    pub fn add_exact(&self, other: &Posit) -> (Posit, Posit) {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), other.to_float());
        self.ctx.split_exact(&xf, &yf)
    }

    /// The exact difference of two posits as a `(truncated, residual)`
    /// pair; see [`add_exact`][Self::add_exact].
    pub fn sub_exact(&self, other: &Posit) -> (Posit, Posit) {
        self.assert_same_format(other);
        let (xf, yf) = (self.to_float(), -other.to_float());
        self.ctx.split_exact(&xf, &yf)
    }

    /// `self * other` in the promoted format `(2 * nbits, es + 1)`.
    /// The promoted product is wide enough that encoding never rounds.
    pub fn mul_promote(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let big = self.ctx.promoted();
        let (xf, yf) = (self.to_float(), other.to_float());
        let prod = Float::with_val(big.working_prec(), &xf * &yf);
        big.round(&prod)
    }

    /// `self / other` in the promoted format `(2 * nbits, es + 1)`.
    pub fn div_promote(&self, other: &Posit) -> Posit {
        self.assert_same_format(other);
        let big = self.ctx.promoted();
        let (xf, yf) = (self.to_float(), other.to_float());
        let quot = Float::with_val(big.working_prec(), &xf / &yf);
        big.round(&quot)
    }

    /// Casts to the promoted format `(2 * nbits, es + 1)`; always
    /// exact.
    pub fn up(&self) -> Posit {
        self.ctx.promoted().round(&self.to_float())
    }

    /// Casts to the demoted format `(nbits / 2, es - 1)`; may round.
    pub fn down(&self) -> Posit {
        self.ctx.demoted().round(&self.to_float())
    }

    /// The value rounded to a signed 64-bit integer, nearest-even (so
    /// magnitudes at or below 1/2 go to zero). NaR yields `i64::MAX`.
    /// Magnitudes at or above `2^63` saturate, negative ones to
    /// `-i64::MAX`.
    pub fn to_int(&self) -> i64 {
        let f = self.to_float();
        if f.is_infinite() {
            return i64::MAX;
        }
        if f.is_zero() {
            return 0;
        }
        if f.get_exp().unwrap() >= 64 {
            return if f.is_sign_negative() {
                -i64::MAX
            } else {
                i64::MAX
            };
        }
        let (i, _) = f.to_integer_round(Round::Nearest).unwrap();
        // a magnitude below 2^63 can still round up to exactly 2^63
        i.to_i64().unwrap_or(i64::MAX)
    }

    /// The value rounded to an unsigned 64-bit integer, nearest-even.
    /// NaR yields `u64::MAX`; values at or above `2^64` saturate and
    /// negative values clamp to zero.
    pub fn to_uint(&self) -> u64 {
        let f = self.to_float();
        if f.is_infinite() {
            return u64::MAX;
        }
        if f.is_zero() || f.is_sign_negative() {
            return 0;
        }
        if f.get_exp().unwrap() > 64 {
            return u64::MAX;
        }
        let (i, _) = f.to_integer_round(Round::Nearest).unwrap();
        i.to_u64().unwrap_or(u64::MAX)
    }

    /// The exponent `z` for which `0.5 * 2^z <= |value| < 2^z`.
    /// Zero and NaR return 0.
    pub fn exp(&self) -> i32 {
        self.to_float().get_exp().unwrap_or(0)
    }

    /// A posit with the same significand and an exponent of zero: a
    /// value in `[1/2, 1)` carrying the sign of the input. Zero and
    /// NaR pass through unchanged.
    pub fn mant(&self) -> Posit {
        if self.is_nar() || self.is_zero() {
            return self.clone();
        }
        let mut f = self.to_float();
        let e = f.get_exp().unwrap();
        f >>= e;
        self.ctx.round(&f)
    }

    /// Multiplies by `2^x` by adjusting the exponent; rounds only when
    /// the result leaves the dynamic range.
    pub fn exp_add(&self, x: i32) -> Posit {
        let mut f = self.to_float();
        f <<= x;
        self.ctx.round(&f)
    }
}

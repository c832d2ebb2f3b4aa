use std::cmp::Ordering;

use num_traits::{One, Zero};
use rug::float::Special;
use rug::{Float, Integer};

use crate::util::{bitmask, negate};

use super::PositContext;

/// A posit number: an `nbits`-wide two's-complement bit pattern paired
/// with the [`PositContext`] that gives it meaning.
///
/// Values are immutable; every operation allocates a fresh `Posit`.
#[derive(Clone, Debug)]
pub struct Posit {
    pub(crate) bits: Integer,
    pub(crate) ctx: PositContext,
}

impl Posit {
    /// Returns the context under which this number was created.
    pub fn ctx(&self) -> &PositContext {
        &self.ctx
    }

    /// Borrows the raw bit pattern.
    pub fn bits(&self) -> &Integer {
        &self.bits
    }

    /// Consumes this posit, returning the bit pattern.
    pub fn into_bits(self) -> Integer {
        self.bits
    }

    /// The low 64 bits of the pattern as a `u64`.
    pub fn to_u64_raw(&self) -> u64 {
        self.bits.to_u64_wrapping()
    }

    /// Returns true if this posit is NaR.
    pub fn is_nar(&self) -> bool {
        self.bits.count_ones() == Some(1) && self.bits.get_bit((self.ctx.nbits() - 1) as u32)
    }

    /// Returns true if this posit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Two's-complement negation of the bit pattern: exactly `-x`.
    /// Zero and NaR are their own negation.
    pub fn neg(&self) -> Posit {
        self.ctx.make(negate(&self.bits, self.ctx.nbits()))
    }

    /// Total order over posits of one format: the signed-integer order
    /// of the bit patterns. NaR orders below every real value.
    pub fn cmp(&self, other: &Posit) -> Ordering {
        self.assert_same_format(other);
        self.signed_bits().cmp(&other.signed_bits())
    }

    /// The pattern read as a signed `nbits`-wide integer.
    fn signed_bits(&self) -> Integer {
        let n = self.ctx.nbits();
        if self.bits.get_bit((n - 1) as u32) {
            self.bits.clone() - (Integer::one() << (n as u32))
        } else {
            self.bits.clone()
        }
    }

    pub(crate) fn assert_same_format(&self, other: &Posit) {
        assert!(
            self.ctx == other.ctx,
            "posit formats differ: ({}, {}) vs ({}, {})",
            self.ctx.es(),
            self.ctx.nbits(),
            other.ctx.es(),
            other.ctx.nbits()
        );
    }

    /// Decodes the bit pattern into an MPFR real at the format's
    /// working precision. The conversion is always exact. NaR maps to
    /// infinity.
    pub fn to_float(&self) -> Float {
        let nbits = self.ctx.nbits();
        let es = self.ctx.es();
        let prec = self.ctx.working_prec();

        if self.is_nar() {
            return Float::with_val(prec, Special::Infinity);
        }
        if self.is_zero() {
            return Float::with_val(prec, Special::Zero);
        }

        let negative = self.bits.get_bit((nbits - 1) as u32);
        let mag = if negative {
            negate(&self.bits, nbits)
        } else {
            self.bits.clone()
        };

        // The bit below the sign opens the regime run; its value tells
        // the side of 1 the magnitude lies on. The run ends at the
        // first opposite bit (the guard), which may be absent when the
        // run reaches the LSB.
        let less_than_1 = !mag.get_bit((nbits - 2) as u32);
        let mut run = 1usize;
        let mut guard_idx = nbits as isize - 3;
        while guard_idx >= 0 && mag.get_bit(guard_idx as u32) != less_than_1 {
            run += 1;
            guard_idx -= 1;
        }
        let k = if less_than_1 {
            -(run as isize)
        } else {
            run as isize - 1
        };

        // Everything strictly below the guard is payload: `es` bits of
        // subexponent from the top, fraction below. A payload shorter
        // than `es` reads as a subexponent with its missing low bits
        // zero.
        let (efield, frac, frac_len) = if guard_idx >= 0 {
            let payload_len = guard_idx as usize;
            let payload = Integer::from(&mag & &bitmask(payload_len));
            if payload_len > es {
                let frac_len = payload_len - es;
                let efield = Integer::from(&payload >> (frac_len as u32));
                (efield, payload & bitmask(frac_len), frac_len)
            } else {
                (payload << ((es - payload_len) as u32), Integer::new(), 0)
            }
        } else {
            (Integer::new(), Integer::new(), 0)
        };

        let exponent = k * self.ctx.rscale() + efield.to_u32().unwrap() as isize;

        // value = (1 + frac / 2^frac_len) * 2^exponent
        let c = (Integer::one() << (frac_len as u32)) | frac;
        let mut f = Float::with_val(prec, &c);
        f <<= (exponent - frac_len as isize) as i32;
        if negative {
            f = -f;
        }
        f
    }
}

use std::cmp::Ordering;

use num_traits::One;
use rug::float::Round;
use rug::ops::{AddAssignRound, SubAssignRound};
use rug::{Float, Integer};

use crate::util::{bitmask, negate};

use super::Posit;

/// Rounding context for posit numbers: the format parameters
/// `(es, nbits)`.
///
/// Values rounded under this context are posit numbers as described by
/// the Posit standard: base-2 scientific numbers
/// `(-1)^s * (2^2^es)^k * 2^e * (1 + f)` where `k` is the regime,
/// `e` is the `es`-bit subexponent and `f` is a binary fraction in
/// `[0, 1)`. The regime is stored as a variable-length run, so the
/// widths of the subexponent and fraction fields shrink as `|k|` grows;
/// precision tapers away from magnitude 1. The value `2^2^es` is called
/// `useed`.
///
/// The two reserved patterns are zero (all bits clear) and NaR
/// (sign bit alone). Every other pattern denotes a dyadic rational, and
/// negation of the value is exactly two's-complement negation of the
/// pattern.
///
/// Rounding is round-to-nearest, ties to even, over the encoded frame,
/// so ties are resolved toward the pattern with its last bit clear.
/// Magnitudes beyond the representable range saturate to
/// [`maxval`][Self::maxval]/[`minval`][Self::minval]; they never round
/// to zero or NaR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositContext {
    es: usize,
    nbits: usize,
}

impl PositContext {
    /// Implementation limit: maximum exponent field size.
    pub const ES_MAX: usize = 16;
    /// Minimum bitwidth padding above `es`.
    pub const PAD_MIN: usize = 4;

    pub fn new(es: usize, nbits: usize) -> Self {
        assert!(
            es <= Self::ES_MAX,
            "exponent field needs to be at most {} bits, given {} bits",
            Self::ES_MAX,
            es
        );
        assert!(
            nbits >= es + Self::PAD_MIN,
            "total bitwidth needs to be at least {} bits, given {} bits",
            es + Self::PAD_MIN,
            nbits
        );

        Self { es, nbits }
    }

    /// Returns the exponent field size of this format.
    pub fn es(&self) -> usize {
        self.es
    }

    /// Returns the total bitwidth of this format.
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Posit terminology for `2^2^es`, the regime base.
    pub fn useed(&self) -> Integer {
        Integer::one() << (1u32 << self.es)
    }

    /// The exponent scale `2^es`.
    pub fn rscale(&self) -> isize {
        1 << self.es
    }

    /// Binary logarithm of the largest representable magnitude:
    /// `nbits * 2^es - 2^(es + 1)`.
    pub fn log2_maxval(&self) -> isize {
        (self.nbits as isize) * self.rscale() - (1 << (self.es + 1))
    }

    /// Precision for real-domain arithmetic over this format.
    pub(crate) fn working_prec(&self) -> u32 {
        (2 * self.nbits) as u32
    }

    /// The next format up the ladder: `(2 * nbits, es + 1)`.
    pub fn promoted(&self) -> PositContext {
        PositContext::new(self.es + 1, self.nbits * 2)
    }

    /// The next format down the ladder: `(nbits / 2, es - 1)`.
    pub fn demoted(&self) -> PositContext {
        assert!(self.es >= 1, "there is no smaller posit format");
        PositContext::new(self.es - 1, self.nbits / 2)
    }

    /// Constructs zero in this format.
    pub fn zero(&self) -> Posit {
        self.make(Integer::new())
    }

    /// Constructs NaR, the single non-real marker value.
    pub fn nar(&self) -> Posit {
        self.make(Integer::one() << ((self.nbits - 1) as u32))
    }

    /// Constructs +1 (regime bit alone).
    pub fn one(&self) -> Posit {
        self.make(Integer::one() << ((self.nbits - 2) as u32))
    }

    /// Constructs -1.
    pub fn neg_one(&self) -> Posit {
        let bits = (Integer::one() << ((self.nbits - 1) as u32))
            | (Integer::one() << ((self.nbits - 2) as u32));
        self.make(bits)
    }

    /// Largest representable value, `2^log2_maxval`.
    pub fn maxval(&self) -> Posit {
        self.make(bitmask(self.nbits - 1))
    }

    /// Negation of [`maxval`][Self::maxval], the most negative value.
    pub fn maxval_neg(&self) -> Posit {
        self.make((Integer::one() << ((self.nbits - 1) as u32)) + 1u32)
    }

    /// Smallest positive value, `2^-log2_maxval`.
    pub fn minval(&self) -> Posit {
        self.make(Integer::one())
    }

    /// Negation of [`minval`][Self::minval] (all bits set).
    pub fn minval_neg(&self) -> Posit {
        self.make(bitmask(self.nbits))
    }

    /// Constructs a posit from a raw bit pattern, keeping the low
    /// `nbits` bits. This is the only way to build a value without
    /// going through rounding.
    pub fn from_bits(&self, bits: Integer) -> Posit {
        self.make(bits.keep_bits(self.nbits as u32))
    }

    pub(crate) fn make(&self, bits: Integer) -> Posit {
        Posit {
            bits,
            ctx: self.clone(),
        }
    }

    /// Rounds `val` into this format under round-to-nearest, ties to
    /// even, discarding the exactness flag.
    pub fn round(&self, val: &Float) -> Posit {
        self.encode(val, false).0
    }

    /// Encodes an MPFR real as a posit of this format, reporting
    /// whether the encoding was exact.
    ///
    /// `truncate` selects rounding toward negative infinity over the
    /// magnitude frame instead of round-to-nearest; it is the internal
    /// mode of [`Posit::add_exact`].
    ///
    /// Infinities and NaN encode as NaR. Out-of-range magnitudes
    /// saturate to `maxval`/`minval`.
    pub fn encode(&self, val: &Float, truncate: bool) -> (Posit, bool) {
        if val.is_infinite() || val.is_nan() {
            return (self.nar(), false);
        }
        if val.is_zero() {
            return (self.zero(), true);
        }

        let nbits = self.nbits;
        let es = self.es;
        let negative = val.is_sign_negative();
        let e = val.get_exp().unwrap() as isize;

        // Regime run length and subexponent of the destination window.
        // The subexponent is stored mirrored below magnitude 1 so that
        // pattern order agrees with value order.
        let less_than_1 = e < 1;
        let scale = if less_than_1 {
            (-e) as usize
        } else {
            (e - 1) as usize
        };
        let regime_run = (scale >> es) + 1;
        let mut subexp = scale % (1usize << es);
        if less_than_1 {
            subexp = (1usize << es) - 1 - subexp;
        }

        // The frame starts as a lone marker bit. The marker anchors the
        // top of the posit window while the value is assembled below it
        // and is stripped again after rounding.
        let mut frame = Float::with_val((2 * nbits - 1) as u32, 1u32);
        let mut inexact = false;

        // regime run (its terminator is the guard bit below)
        for i in 0..regime_run {
            if i >= nbits - 1 {
                // the run alone overflows the window; phase 2 saturates
                inexact = true;
                break;
            }
            frame <<= 1;
            if !less_than_1 {
                frame += 1u32;
            }
        }

        // guard bit
        frame <<= 1;
        if less_than_1 {
            frame += 1u32;
        }

        // subexponent field
        frame <<= es as u32;
        frame += subexp as u32;

        // drop the hidden bit; folding in `val` below restores it
        frame -= 1u32;

        // align the frame's units place with the top bit of the input
        frame <<= (e - 1) as i32;

        // Phase 1: fold in the input, truncating toward zero. Digits of
        // `val` that extend past the frame latch the sticky flag.
        let dir = if negative {
            frame.sub_assign_round(val, Round::Zero)
        } else {
            frame.add_assign_round(val, Round::Zero)
        };
        if dir != Ordering::Equal {
            inexact = true;
        }

        // re-anchor the marker at bit `2 * nbits - 1`
        let top = frame.get_exp().unwrap();
        frame <<= (2 * nbits) as i32 - top;

        // Phase 2: widen by one digit and inject the sticky flag as a
        // single ulp there, where it can only ever break a tie. Then
        // reduce to the posit width.
        frame.set_prec((2 * nbits) as u32);
        if inexact {
            frame += 1u32;
        }
        let rnd = if truncate { Round::Down } else { Round::Nearest };
        if frame.set_prec_round(nbits as u32, rnd) != Ordering::Equal {
            inexact = true;
        }

        // bring the units place back under the posit's LSB and extract
        frame >>= nbits as u32;
        let (mut bits, dir) = frame.to_integer_round(Round::Zero).unwrap();
        assert_eq!(dir, Ordering::Equal, "posit frame was not integral");
        assert!(
            bits.get_bit((nbits - 1) as u32),
            "posit frame lost its marker bit"
        );
        bits.set_bit((nbits - 1) as u32, false);

        if negative {
            bits = negate(&bits, nbits);
        }

        (self.make(bits), !inexact)
    }
}

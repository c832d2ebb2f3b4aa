// util.rs
//
// Utility functions
//

use num_traits::One;
use rug::Integer;

/// Produces a bitmask (as an [`Integer`]) encoding `(1 << n) - 1`
/// which can be used to extract the first `n` binary digits.
pub(crate) fn bitmask(n: usize) -> Integer {
    (Integer::one() << (n as u32)) - 1u32
}

/// Two's-complement negation within an `n`-bit field.
/// Zero and the NaR pattern are their own negation.
pub(crate) fn negate(bits: &Integer, n: usize) -> Integer {
    let flipped = bitmask(n) ^ bits;
    (flipped + 1u32) & bitmask(n)
}

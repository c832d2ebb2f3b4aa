use std::cmp::Ordering;

use positnum::PositContext;
use rug::{Float, Integer};

#[test]
fn arithmetic_small_integers() {
    let ctx = PositContext::new(2, 32);
    let a = ctx.from_int(6);
    let b = ctx.from_int(7);
    assert_eq!(a.add(&b).to_int(), 13);
    assert_eq!(a.sub(&b).to_int(), -1);
    assert_eq!(a.mul(&b).to_int(), 42);
    assert_eq!(ctx.from_int(42).div(&a).to_int(), 7);
    assert_eq!(ctx.from_int(49).sqrt().to_int(), 7);
}

#[test]
fn nar_propagates() {
    let ctx = PositContext::new(1, 16);
    let nar = ctx.nar();
    let one = ctx.one();
    assert!(nar.add(&one).is_nar());
    assert!(one.sub(&nar).is_nar());
    assert!(nar.mul(&nar).is_nar());
    assert!(one.div(&ctx.zero()).is_nar());
    assert!(ctx.neg_one().sqrt().is_nar());
    assert!(nar.sqrt().is_nar());
    assert!(nar.up().is_nar());
    assert!(nar.down().is_nar());
    assert!(nar.exp_add(3).is_nar());
}

#[test]
fn add_exact_reconstruction() {
    let ctx = PositContext::new(0, 8);

    // 12 + 0.25 does not fit posit<0, 8>; the pair must carry it
    let x = ctx.from_int(12);
    let y = ctx.round(&Float::with_val(32, 0.25));
    assert_eq!(y.to_float(), 0.25);

    let (hi, lo) = x.add_exact(&y);
    assert_eq!(hi.to_float(), 12);
    assert_eq!(lo.to_float(), 0.25);

    let sum = Float::with_val(64, x.to_float() + y.to_float());
    let recon = Float::with_val(64, hi.to_float() + lo.to_float());
    assert_eq!(recon, sum);
}

#[test]
fn add_exact_sweep_near_one() {
    // all pairs of patterns decoding into [0.75, 1.5]: sums land where
    // the residual is always representable
    let ctx = PositContext::new(0, 8);
    for i in 0x30u32..=0x50 {
        for j in 0x30u32..=0x50 {
            let x = ctx.from_bits(Integer::from(i));
            let y = ctx.from_bits(Integer::from(j));
            let (hi, lo) = x.add_exact(&y);
            let sum = Float::with_val(64, x.to_float() + y.to_float());
            let recon = Float::with_val(64, hi.to_float() + lo.to_float());
            assert_eq!(recon, sum, "reconstruction failed at ({:#x}, {:#x})", i, j);

            let (hi, lo) = x.sub_exact(&y);
            let diff = Float::with_val(64, x.to_float() - y.to_float());
            let recon = Float::with_val(64, hi.to_float() + lo.to_float());
            assert_eq!(recon, diff, "sub reconstruction failed at ({:#x}, {:#x})", i, j);
        }
    }
}

#[test]
fn add_exact_on_nar_yields_nar() {
    let ctx = PositContext::new(0, 8);
    let (hi, lo) = ctx.nar().add_exact(&ctx.one());
    assert!(hi.is_nar());
    assert!(lo.is_nar());
}

#[test]
fn mul_promote_is_exact() {
    let ctx = PositContext::new(0, 8);
    for i in (0u32..256).step_by(3) {
        for j in (0u32..256).step_by(5) {
            let x = ctx.from_bits(Integer::from(i));
            let y = ctx.from_bits(Integer::from(j));
            if x.is_nar() || y.is_nar() {
                assert!(x.mul_promote(&y).is_nar());
                continue;
            }
            let wide = x.mul_promote(&y);
            assert_eq!(wide.ctx().es(), 1);
            assert_eq!(wide.ctx().nbits(), 16);
            let exact = Float::with_val(64, x.to_float() * y.to_float());
            assert_eq!(
                wide.to_float(),
                exact,
                "promoted product rounded at ({:#x}, {:#x})",
                i,
                j
            );
        }
    }
}

#[test]
fn promote_one_lands_on_one() {
    let ctx = PositContext::new(0, 8);
    let one = ctx.one();
    let prod = one.mul_promote(&one);
    assert_eq!(*prod.bits(), 0x4000u32);
}

#[test]
fn div_promote() {
    let ctx = PositContext::new(0, 8);
    let three = ctx.from_int(3);
    let two = ctx.from_int(2);
    let q = three.div_promote(&two);
    assert_eq!(q.ctx().nbits(), 16);
    assert_eq!(q.to_float(), 1.5);

    // a non-dyadic quotient rounds even in the wider format
    let (_, exact) = q
        .ctx()
        .encode(&Float::with_val(64, ctx.one().to_float() / three.to_float()), false);
    assert!(!exact);
}

#[test]
fn down_up_identity() {
    let ctx = PositContext::new(0, 8);
    for i in 0u32..256 {
        let p = ctx.from_bits(Integer::from(i));
        let up = p.up();
        // widening never moves the value
        assert_eq!(up.to_float(), p.to_float());
        assert_eq!(up.down().bits(), p.bits(), "up/down failed at {:#x}", i);
    }
}

#[test]
fn int_conversion() {
    let ctx = PositContext::new(2, 32);
    assert_eq!(ctx.from_int(-37).to_int(), -37);
    assert_eq!(ctx.from_int(0).to_int(), 0);
    assert_eq!(ctx.from_uint(91).to_uint(), 91);
    assert_eq!(ctx.nar().to_int(), i64::MAX);
    assert_eq!(ctx.nar().to_uint(), u64::MAX);

    // |x| <= 1/2 rounds to zero
    let half = ctx.round(&Float::with_val(32, 0.5));
    assert_eq!(half.to_int(), 0);
    assert_eq!(half.neg().to_int(), 0);
    assert_eq!(half.to_uint(), 0);

    // ties to even above that
    assert_eq!(ctx.round(&Float::with_val(32, 1.5)).to_int(), 2);
    assert_eq!(ctx.round(&Float::with_val(32, 2.5)).to_int(), 2);
    assert_eq!(ctx.round(&Float::with_val(32, 2.5)).to_uint(), 2);
    assert_eq!(ctx.round(&Float::with_val(32, -1.5)).to_int(), -2);

    // saturation: maxval of posit<2, 32> is 2^120
    assert_eq!(ctx.maxval().to_int(), i64::MAX);
    assert_eq!(ctx.maxval_neg().to_int(), -i64::MAX);
    assert_eq!(ctx.maxval().to_uint(), u64::MAX);

    // negative values clamp to zero on the unsigned path
    assert_eq!(ctx.neg_one().to_uint(), 0);
    assert_eq!(ctx.from_int(-37).to_uint(), 0);
}

#[test]
fn exponent_manipulation() {
    let ctx = PositContext::new(2, 32);

    // 6 = 0.75 * 2^3
    let x = ctx.from_int(6);
    assert_eq!(x.exp(), 3);
    assert_eq!(x.mant().to_float(), 0.75);
    assert_eq!(x.neg().exp(), 3);
    assert_eq!(x.neg().mant().to_float(), -0.75);

    assert_eq!(x.exp_add(2).to_int(), 24);
    assert_eq!(x.exp_add(-1).to_int(), 3);

    // zero and NaR pass through mant and report exponent 0
    assert!(ctx.nar().mant().is_nar());
    assert!(ctx.zero().mant().is_zero());
    assert_eq!(ctx.zero().exp(), 0);
    assert_eq!(ctx.nar().exp(), 0);
}

#[test]
fn exp_add_can_round_at_the_edge() {
    let ctx = PositContext::new(0, 8);
    // pushing maxval further up saturates
    let p = ctx.maxval().exp_add(3);
    assert_eq!(p.bits(), ctx.maxval().bits());
}

#[test]
fn total_order() {
    let ctx = PositContext::new(1, 16);
    let ordered = [
        ctx.nar(),
        ctx.maxval_neg(),
        ctx.neg_one(),
        ctx.minval_neg(),
        ctx.zero(),
        ctx.minval(),
        ctx.one(),
        ctx.maxval(),
    ];
    for w in ordered.windows(2) {
        assert_eq!(w[0].cmp(&w[1]), Ordering::Less);
        assert_eq!(w[1].cmp(&w[0]), Ordering::Greater);
    }
    assert_eq!(ctx.one().cmp(&ctx.one()), Ordering::Equal);
}

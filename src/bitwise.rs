//! Bitwise AND/OR/XOR/NOT via a two's-complement bridge.
//!
//! `BigInt` is sign-magnitude internally, so a bitwise operator needs both
//! operands temporarily reinterpreted as fixed-width two's-complement words
//! before the pointwise limb operation is meaningful.

use crate::big_int::BigInt;

/// Reinterprets `src` as a `width`-limb two's-complement word: zero-extends
/// non-negative values, complement-and-increments negative ones.
fn to_twos_complement(src: &BigInt, width: usize) -> BigInt {
    let mut dst = BigInt::with_capacity(false, width);
    for i in 0..width {
        let v = if i < src.size() { src.mag.get(i) } else { 0 };
        dst.mag.set(i, if src.sign { !v } else { v });
    }
    if src.sign {
        dst.add_short_abs(1);
        debug_assert_eq!(dst.mag.len(), width, "two's-complement increment overflowed width");
    }
    dst
}

fn bitwise_op(
    a: &BigInt,
    b: &BigInt,
    limb_op: impl Fn(u32, u32) -> u32,
    sign_op: impl Fn(bool, bool) -> bool,
) -> BigInt {
    let sign = sign_op(a.sign, b.sign);
    let width = a.size().max(b.size());
    let ta = to_twos_complement(a, width);
    let tb = to_twos_complement(b, width);

    let mut result = BigInt::with_capacity(false, width);
    for i in 0..width {
        result.mag.set(i, limb_op(ta.mag.get(i), tb.mag.get(i)));
    }
    if sign {
        // Reverse the bridge: complement-and-increment recovers the magnitude.
        for i in 0..width {
            let v = result.mag.get(i);
            result.mag.set(i, !v);
        }
        result.add_short_abs(1);
    }
    result.sign = sign;
    result.normalize();
    result
}

impl BigInt {
    /// `self &= rhs`. Negative iff both operands are negative.
    pub fn and_assign(&mut self, rhs: &BigInt) {
        *self = bitwise_op(self, rhs, |a, b| a & b, |sa, sb| sa && sb);
    }

    /// `self |= rhs`. Negative iff either operand is negative.
    pub fn or_assign(&mut self, rhs: &BigInt) {
        *self = bitwise_op(self, rhs, |a, b| a | b, |sa, sb| sa || sb);
    }

    /// `self ^= rhs`. Negative iff exactly one operand is negative.
    pub fn xor_assign(&mut self, rhs: &BigInt) {
        *self = bitwise_op(self, rhs, |a, b| a ^ b, |sa, sb| sa ^ sb);
    }

    /// `!self`, defined as `-self - 1`.
    pub fn bitwise_not(&self) -> BigInt {
        let mut r = self.clone();
        r.sign = !r.sign;
        r.normalize();
        r.sub_assign(&BigInt::from_i32(1));
        r
    }
}

//! Property-based tests using quickcheck.
//!
//! Unlike a fixed-width integer, `BigInt` never overflows, so these
//! properties hold for every input rather than needing an overflow carve-out.

#![cfg(test)]

use quickcheck_macros::quickcheck;

use crate::BigInt;

fn bi(n: i32) -> BigInt {
    BigInt::from_i32(n)
}

#[quickcheck]
fn add_is_commutative(a: i32, b: i32) -> bool {
    &bi(a) + &bi(b) == &bi(b) + &bi(a)
}

#[quickcheck]
fn add_is_associative(a: i32, b: i32, c: i32) -> bool {
    (&bi(a) + &bi(b)) + &bi(c) == &bi(a) + (&bi(b) + &bi(c))
}

#[quickcheck]
fn sub_self_is_zero(a: i32) -> bool {
    (&bi(a) - &bi(a)).is_zero()
}

#[quickcheck]
fn add_zero_is_identity(a: i32) -> bool {
    &bi(a) + &BigInt::zero() == bi(a)
}

#[quickcheck]
fn mul_is_commutative(a: i32, b: i32) -> bool {
    &bi(a) * &bi(b) == &bi(b) * &bi(a)
}

#[quickcheck]
fn mul_is_associative(a: i16, b: i16, c: i16) -> bool {
    let (a, b, c) = (bi(a as i32), bi(b as i32), bi(c as i32));
    (&a * &b) * &c == &a * (&b * &c)
}

#[quickcheck]
fn mul_distributes_over_add(a: i16, b: i16, c: i16) -> bool {
    let (a, b, c) = (bi(a as i32), bi(b as i32), bi(c as i32));
    &a * (&b + &c) == &a * &b + &a * &c
}

#[quickcheck]
fn mul_by_one_is_identity(a: i32) -> bool {
    &bi(a) * &bi(1) == bi(a)
}

#[quickcheck]
fn mul_by_zero_is_zero(a: i32) -> bool {
    (&bi(a) * &BigInt::zero()).is_zero()
}

#[quickcheck]
fn div_mod_identity(a: i32, b: i32) -> bool {
    if b == 0 {
        return true;
    }
    let (a, b) = (bi(a), bi(b));
    let q = &a / &b;
    let r = &a % &b;
    (q * &b) + r == a
}

#[quickcheck]
fn rem_has_sign_of_dividend(a: i32, b: i32) -> bool {
    if b == 0 {
        return true;
    }
    let rem = &bi(a) % &bi(b);
    a == 0 || rem.is_zero() || rem.is_negative() == (a < 0)
}

#[quickcheck]
fn bitwise_absorption(a: i32, b: i32) -> bool {
    let (a, b) = (bi(a), bi(b));
    (&a & &b) | (&a ^ &b) == &a | &b
}

#[quickcheck]
fn not_is_negate_minus_one(a: i32) -> bool {
    !bi(a) == -bi(a) - bi(1)
}

#[quickcheck]
fn xor_self_is_zero(a: i32) -> bool {
    (&bi(a) ^ &bi(a)).is_zero()
}

#[quickcheck]
fn and_self_is_identity(a: i32) -> bool {
    &bi(a) & &bi(a) == bi(a)
}

#[quickcheck]
fn shl_then_shr_is_identity(a: i32, shift: u8) -> bool {
    let shift = shift as u32 % 96;
    let mut x = bi(a);
    x <<= shift;
    x >>= shift;
    x == bi(a)
}

#[quickcheck]
fn shr_matches_floor_division_by_power_of_two(a: i32, shift: u8) -> bool {
    let shift = (shift % 20) as u32;
    let mut divisor = bi(1);
    divisor <<= shift;
    let mut expected = bi(a);
    expected.div_assign(&divisor).ok();
    let mut by_shift = bi(a);
    by_shift >>= shift;
    // truncating division and floor-shift agree whenever a is non-negative,
    // or the shift is exact; for negative a with a remainder they differ by
    // exactly one, since div truncates toward zero and shift floors.
    by_shift == expected || by_shift == &expected - &bi(1)
}

#[quickcheck]
fn parse_display_round_trip(a: i32) -> bool {
    let n = bi(a);
    n.to_string().parse::<BigInt>().unwrap() == n
}

#[quickcheck]
fn ordering_matches_native_i32(a: i32, b: i32) -> bool {
    bi(a).cmp(&bi(b)) == a.cmp(&b)
}

#[quickcheck]
fn normal_form_holds_after_every_op(a: i32, b: i32) -> bool {
    if b == 0 {
        return true;
    }
    let check = |n: &BigInt| n.mag.len() == 1 || n.mag.get(n.mag.len() - 1) != 0;
    let (x, y) = (bi(a), bi(b));
    let results = [
        &x + &y,
        &x - &y,
        &x * &y,
        &x / &y,
        &x % &y,
        &x & &y,
        &x | &y,
        &x ^ &y,
    ];
    results.iter().all(check) && results.iter().all(|n| !n.is_zero() || !n.is_negative())
}

//! Operator trait glue. The `*_assign` methods elsewhere in the crate hold
//! all the arithmetic; this module just wires them up to `std::ops` so
//! `BigInt` behaves like a built-in integer at call sites.
//!
//! `Div`/`Rem` panic on division by zero, matching the primitive integer
//! traits. Callers that want to handle the zero-divisor case without a
//! panic should call [`BigInt::div_assign`] or [`BigInt::rem_assign`]
//! directly, which return a [`Result`](crate::error::Result).

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
);

use crate::big_int::BigInt;

/// Implements `$Trait`/`$TraitAssign` for all four `(BigInt, &BigInt)`
/// combinations of `lhs $op rhs`, all routed through `$assign_method`.
macro_rules! forward_binop {
    ($Trait:ident, $method:ident, $TraitAssign:ident, $assign_method:ident, $assign_call:ident) => {
        impl $TraitAssign<&BigInt> for BigInt {
            fn $assign_call(&mut self, rhs: &BigInt) {
                self.$assign_method(rhs);
            }
        }

        impl $TraitAssign<BigInt> for BigInt {
            fn $assign_call(&mut self, rhs: BigInt) {
                self.$assign_method(&rhs);
            }
        }

        impl $Trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(mut self, rhs: &BigInt) -> BigInt {
                self.$assign_method(rhs);
                self
            }
        }

        impl $Trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(mut self, rhs: BigInt) -> BigInt {
                self.$assign_method(&rhs);
                self
            }
        }

        impl $Trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }

        impl $Trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign_method(&rhs);
                out
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, and_assign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, or_assign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, xor_assign, bitxor_assign);

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        BigInt::div_assign(self, rhs).expect("division by zero");
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        BigInt::div_assign(self, &rhs).expect("division by zero");
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;
    fn div(mut self, rhs: &BigInt) -> BigInt {
        DivAssign::div_assign(&mut self, rhs);
        self
    }
}

impl Div<BigInt> for BigInt {
    type Output = BigInt;
    fn div(mut self, rhs: BigInt) -> BigInt {
        DivAssign::div_assign(&mut self, &rhs);
        self
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        DivAssign::div_assign(&mut out, rhs);
        out
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        BigInt::rem_assign(self, rhs).expect("division by zero");
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        BigInt::rem_assign(self, &rhs).expect("division by zero");
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = BigInt;
    fn rem(mut self, rhs: &BigInt) -> BigInt {
        RemAssign::rem_assign(&mut self, rhs);
        self
    }
}

impl Rem<BigInt> for BigInt {
    type Output = BigInt;
    fn rem(mut self, rhs: BigInt) -> BigInt {
        RemAssign::rem_assign(&mut self, &rhs);
        self
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        RemAssign::rem_assign(&mut out, rhs);
        out
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, bits: u32) {
        BigInt::shl_assign(self, bits);
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;
    fn shl(mut self, bits: u32) -> BigInt {
        BigInt::shl_assign(&mut self, bits);
        self
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, bits: u32) {
        BigInt::shr_assign(self, bits);
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;
    fn shr(mut self, bits: u32) -> BigInt {
        BigInt::shr_assign(&mut self, bits);
        self
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        let mut out = self.clone();
        out.negate();
        out
    }
}

impl Not for BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        self.bitwise_not()
    }
}

impl Not for &BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        self.bitwise_not()
    }
}

impl BigInt {
    /// `self += 1`. Rust has no native `++`; this is the idiomatic stand-in.
    pub fn inc(&mut self) {
        self.add_assign(&BigInt::from_i32(1));
    }

    /// `self -= 1`.
    pub fn dec(&mut self) {
        self.sub_assign(&BigInt::from_i32(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_assign_methods() {
        let a = BigInt::from_i32(17);
        let b = BigInt::from_i32(5);

        assert_eq!(&a + &b, BigInt::from_i32(22));
        assert_eq!(&a - &b, BigInt::from_i32(12));
        assert_eq!(&a * &b, BigInt::from_i32(85));
        assert_eq!(&a / &b, BigInt::from_i32(3));
        assert_eq!(&a % &b, BigInt::from_i32(2));
    }

    #[test]
    fn neg_and_not() {
        let a = BigInt::from_i32(5);
        assert_eq!(-&a, BigInt::from_i32(-5));
        assert_eq!(!a, BigInt::from_i32(-6));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_by_zero_panics() {
        let a = BigInt::from_i32(1);
        let _ = a / BigInt::zero();
    }

    #[test]
    fn inc_and_dec() {
        let mut a = BigInt::from_i32(0);
        a.inc();
        a.inc();
        a.dec();
        assert_eq!(a, BigInt::from_i32(1));
    }

    #[test]
    fn owned_binop_consumes_and_chains() {
        let a = BigInt::from_i32(10);
        let b = BigInt::from_i32(3);
        let c = BigInt::from_i32(2);
        assert_eq!(a + b * c, BigInt::from_i32(16));
    }
}

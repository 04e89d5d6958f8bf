//! Short arithmetic: operations against a single limb. The workhorses behind
//! decimal parsing/formatting and the scaling step of long division.

use crate::big_int::BigInt;
use crate::error::{BigIntError, Result};

impl BigInt {
    /// Adds `val` into the magnitude, ripple-carrying upward. Sign untouched.
    pub(crate) fn add_short_abs(&mut self, val: u32) {
        let mut carry = val as u64;
        let mut i = 0;
        while carry != 0 && i < self.mag.len() {
            let sum = self.mag.get(i) as u64 + carry;
            self.mag.set(i, sum as u32);
            carry = sum >> 32;
            i += 1;
        }
        if carry != 0 {
            self.mag.push_back(carry as u32);
        }
        self.normalize();
    }

    /// Multiplies the magnitude by `val`. Sign untouched; callers combine
    /// signs via xor.
    pub(crate) fn mul_short(&mut self, val: u32) {
        if val == 0 {
            self.mag = crate::limb_buf::LimbBuf::new(1, 0);
            self.sign = false;
            return;
        }
        let mut carry: u64 = 0;
        for i in 0..self.mag.len() {
            let prod = self.mag.get(i) as u64 * val as u64 + carry;
            self.mag.set(i, prod as u32);
            carry = prod >> 32;
        }
        if carry != 0 {
            self.mag.push_back(carry as u32);
        }
        self.normalize();
    }

    /// Divides the magnitude by `val` in place, returning the remainder.
    pub(crate) fn div_short(&mut self, val: u32) -> Result<u32> {
        if val == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(0);
        }
        let mut carry: u64 = 0;
        for i in (0..self.mag.len()).rev() {
            let cur = (carry << 32) | self.mag.get(i) as u64;
            self.mag.set(i, (cur / val as u64) as u32);
            carry = cur % val as u64;
        }
        self.normalize();
        Ok(carry as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_short_carries_across_limbs() {
        let mut a = BigInt::from_u64(u32::MAX as u64);
        a.add_short_abs(1);
        assert_eq!(a.size(), 2);
        assert_eq!(a.mag.get(0), 0);
        assert_eq!(a.mag.get(1), 1);
    }

    #[test]
    fn mul_short_by_zero_clears() {
        let mut a = BigInt::from_decimal_str("123456789012345").unwrap();
        a.mul_short(0);
        assert!(a.is_zero());
    }

    #[test]
    fn div_short_by_zero_errors() {
        let mut a = BigInt::from_i32(10);
        assert_eq!(a.div_short(0), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn div_short_roundtrips_with_mul_add() {
        let mut a = BigInt::from_decimal_str("100000000000000000001").unwrap();
        let rem = a.div_short(7).unwrap();
        a.mul_short(7);
        a.add_short_abs(rem);
        assert_eq!(a, BigInt::from_decimal_str("100000000000000000001").unwrap());
    }
}

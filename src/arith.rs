//! Addition and subtraction.

use crate::big_int::BigInt;
use crate::limb_buf::LimbBuf;

impl BigInt {
    /// `self += rhs`.
    pub fn add_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.sign != rhs.sign {
            let mut neg_rhs = rhs.clone();
            neg_rhs.sign = !neg_rhs.sign;
            self.sub_assign(&neg_rhs);
            return;
        }
        let n = self.size().max(rhs.size());
        let mut res = LimbBuf::new(n, 0);
        let mut carry: u64 = 0;
        for i in 0..n {
            let a = if i < self.size() { self.mag.get(i) as u64 } else { 0 };
            let b = if i < rhs.size() { rhs.mag.get(i) as u64 } else { 0 };
            let sum = a + b + carry;
            res.set(i, sum as u32);
            carry = sum >> 32;
        }
        if carry != 0 {
            res.push_back(carry as u32);
        }
        self.mag = res;
    }

    /// `self -= rhs`.
    pub fn sub_assign(&mut self, rhs: &BigInt) {
        if rhs.is_zero() {
            return;
        }
        if self.sign != rhs.sign {
            let mut neg_rhs = rhs.clone();
            neg_rhs.sign = !neg_rhs.sign;
            self.add_assign(&neg_rhs);
            return;
        }
        if BigInt::less_abs(self, rhs) {
            let mut res = rhs.clone();
            res.sub_assign(self);
            res.negate();
            self.swap(&mut res);
            return;
        }
        let n = self.size();
        let mut res = LimbBuf::new(n, 0);
        let mut borrow: u64 = 0;
        for i in 0..n {
            let a = self.mag.get(i) as u64;
            let b = if i < rhs.size() { rhs.mag.get(i) as u64 } else { 0 };
            let (diff, new_borrow) = if a < b + borrow {
                (a + (1u64 << 32) - b - borrow, 1u64)
            } else {
                (a - b - borrow, 0u64)
            };
            res.set(i, diff as u32);
            borrow = new_borrow;
        }
        self.mag = res;
        self.normalize();
    }
}

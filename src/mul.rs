//! Schoolbook multiplication.

use crate::big_int::BigInt;

impl BigInt {
    /// `self *= rhs`, O(n·m) schoolbook multiplication.
    pub fn mul_assign(&mut self, rhs: &BigInt) {
        if self.is_zero() || rhs.is_zero() {
            *self = BigInt::zero();
            return;
        }
        let n = self.size();
        let m = rhs.size();
        let mut res = BigInt::with_capacity(self.sign ^ rhs.sign, n + m);
        for i in 0..n {
            let mut carry: u64 = 0;
            for j in 0..m {
                let product = self.mag.get(i) as u64 * rhs.mag.get(j) as u64
                    + res.mag.get(i + j) as u64
                    + carry;
                res.mag.set(i + j, product as u32);
                carry = product >> 32;
            }
            res.mag.set(i + m, carry as u32);
        }
        res.normalize();
        *self = res;
    }
}

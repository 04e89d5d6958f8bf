//! Bit shifts. `<<` is exact; `>>` is arithmetic and rounds toward negative
//! infinity, matching two's-complement shift semantics on sign-magnitude
//! storage.

use crate::big_int::BigInt;
use crate::limb_buf::LimbBuf;

impl BigInt {
    /// `self <<= bits`.
    pub fn shl_assign(&mut self, bits: u32) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let limb_shift = (bits / 32) as usize;
        let bit_shift = bits % 32;

        let mut new_mag = LimbBuf::new(self.size() + limb_shift + 1, 0);
        for i in 0..self.size() {
            new_mag.set(i + limb_shift, self.mag.get(i));
        }
        if bit_shift > 0 {
            let mut carry: u32 = 0;
            for i in limb_shift..new_mag.len() {
                let v = new_mag.get(i);
                new_mag.set(i, (v << bit_shift) | carry);
                carry = v >> (32 - bit_shift);
            }
        }
        self.mag = new_mag;
        self.normalize();
    }

    /// `self >>= bits`, rounding toward negative infinity: a negative value
    /// with any truncated bit set has its magnitude incremented after the
    /// shift, since `floor(-m / 2^k) == -ceil(m / 2^k)`.
    pub fn shr_assign(&mut self, bits: u32) {
        if bits == 0 {
            return;
        }
        let sign = self.sign;
        let limb_shift = (bits / 32) as usize;
        let bit_shift = bits % 32;

        let mut sticky = false;
        for i in 0..limb_shift.min(self.size()) {
            if self.mag.get(i) != 0 {
                sticky = true;
            }
        }

        let old_len = self.size();
        let new_len = old_len.saturating_sub(limb_shift);
        let mut new_mag = LimbBuf::new(new_len.max(1), 0);
        for i in 0..new_len {
            new_mag.set(i, self.mag.get(i + limb_shift));
        }
        if bit_shift > 0 && new_len > 0 {
            let mask = (1u32 << bit_shift) - 1;
            if new_mag.get(0) & mask != 0 {
                sticky = true;
            }
            let mut carry: u32 = 0;
            for i in (0..new_len).rev() {
                let v = new_mag.get(i);
                new_mag.set(i, (v >> bit_shift) | carry);
                carry = v << (32 - bit_shift);
            }
        }

        self.mag = new_mag;
        self.sign = false;
        self.normalize();
        if sign && sticky {
            self.add_short_abs(1);
        }
        self.sign = sign && !self.is_zero();
    }
}

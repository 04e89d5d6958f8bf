//! Long division: Knuth TAOCP vol. 2, Algorithm D, with the three-limb
//! trial-quotient refinement and a single correction step.

use crate::big_int::BigInt;
use crate::error::{BigIntError, Result};

const BASE: u64 = 1u64 << 32;

fn scale_abs(x: &BigInt, f: u32) -> BigInt {
    let mut y = x.clone();
    y.sign = false;
    y.mul_short(f);
    y
}

/// Estimates the next quotient digit from the top three limbs of the
/// remainder window and the top two limbs of the (normalized) divisor.
/// Accurate to within one; `smaller` below catches the off-by-one case.
fn trial(r: &BigInt, k: usize, m: usize, d: &BigInt) -> u32 {
    let base = BASE as u128;
    let r3 = (r.mag.get(k + m) as u128 * base + r.mag.get(k + m - 1) as u128) * base
        + r.mag.get(k + m - 2) as u128;
    let d2 = ((d.mag.get(m - 1) as u64) << 32) | d.mag.get(m - 2) as u64;
    let q = r3 / d2 as u128;
    q.min(u32::MAX as u128) as u32
}

/// True iff the `m+1`-limb window `r[k..=k+m]` is lexicographically smaller
/// than `dq` (both compared high-limb-first).
fn smaller(r: &BigInt, dq: &BigInt, k: usize, m: usize) -> bool {
    let mut i = m;
    loop {
        let rv = r.mag.get(i + k);
        let dv = dq.mag.get(i);
        if rv != dv {
            return rv < dv;
        }
        if i == 0 {
            return false;
        }
        i -= 1;
    }
}

/// Replaces the window `r[k..=k+m]` with `r[k..=k+m] - dq`, using a 64-bit
/// borrow computed as `1 - diff/BASE`.
fn difference(r: &mut BigInt, dq: &BigInt, k: usize, m: usize) {
    let mut borrow: u64 = 0;
    for i in 0..=m {
        let diff = r.mag.get(i + k) as u64 + BASE - dq.mag.get(i) as u64 - borrow;
        r.mag.set(i + k, (diff % BASE) as u32);
        borrow = 1 - diff / BASE;
    }
}

impl BigInt {
    /// `self /= rhs`, truncating toward zero.
    pub fn div_assign(&mut self, rhs: &BigInt) -> Result<()> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.size() < rhs.size() {
            *self = BigInt::zero();
            return Ok(());
        }
        if rhs.size() == 1 {
            let result_sign = self.sign ^ rhs.sign;
            self.div_short(rhs.mag.get(0))?;
            self.sign = result_sign;
            self.normalize();
            return Ok(());
        }

        let n = self.size();
        let m = rhs.size();
        let f = (BASE / (rhs.mag.get(m - 1) as u64 + 1)) as u32;

        let mut r = scale_abs(self, f);
        let d = scale_abs(rhs, f);
        r.mag.push_back(0);

        let mut q = BigInt::with_capacity(self.sign ^ rhs.sign, n - m + 1);
        for k in (0..=(n - m)).rev() {
            let mut qt = trial(&r, k, m, &d);
            let mut dq = BigInt::from_u64(qt as u64);
            dq.mul_assign(&d);
            dq.mag.resize(m + 1, 0);
            if smaller(&r, &dq, k, m) {
                qt -= 1;
                dq = d.clone();
                dq.mul_short(qt);
                dq.mag.resize(m + 1, 0);
                debug_assert!(
                    !smaller(&r, &dq, k, m),
                    "trial quotient needed more than one correction step"
                );
            }
            q.mag.set(k, qt);
            difference(&mut r, &dq, k, m);
        }
        q.normalize();
        *self = q;
        Ok(())
    }

    /// `self %= rhs`. Computed as `self - (self / rhs) * rhs`, which avoids
    /// unscaling the division remainder. The result takes the sign of the
    /// original dividend.
    pub fn rem_assign(&mut self, rhs: &BigInt) -> Result<()> {
        let mut quotient = self.clone();
        quotient.div_assign(rhs)?;
        quotient.mul_assign(rhs);
        self.sub_assign(&quotient);
        Ok(())
    }
}

//! Decimal text I/O: [`FromStr`] and [`Display`].

use std::fmt;
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::error::BigIntError;

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    /// Formats as decimal digits, sign-prefixed when negative. Repeatedly
    /// divides a scratch copy by 10 and collects remainders, least
    /// significant digit first, then reverses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut scratch = self.clone();
        scratch.sign = false;
        let mut digits = Vec::new();
        while !scratch.is_zero() {
            let rem = scratch.div_short(10).expect("10 is never zero");
            digits.push((b'0' + rem as u8) as char);
        }
        if self.sign {
            write!(f, "-")?;
        }
        for c in digits.iter().rev() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

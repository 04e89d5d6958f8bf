/*!
Arbitrary-precision signed integer arithmetic.

`BigInt` is a sign-magnitude integer with no fixed bit width: its magnitude
grows a limb (a `u32` digit in base 2³²) at a time as values get larger, and
small values (two limbs or fewer) never touch the heap at all. A clone of a
large value shares its limb buffer until one side writes, at which point it
copies first.

## Examples

```rust
use bigint_rs::BigInt;

let mut a: BigInt = "123456789012345678901234567890".parse().unwrap();
let b: BigInt = "987654321098765432109876543210".parse().unwrap();
a += &b;
assert_eq!(a.to_string(), "1111111110111111111011111111100");

let mut q: BigInt = "-7".parse().unwrap();
q %= BigInt::from_i32(3);
assert_eq!(q, BigInt::from_i32(-1));
```

## Design

- Storage: `LimbBuf` holds magnitude limbs inline for small values and in a
  copy-on-write [`std::rc::Rc`]-shared heap buffer past that, so cloning a
  large `BigInt` is O(1) until a write forces a copy.
- Division implements Knuth's Algorithm D (TAOCP vol. 2) with a three-limb
  trial quotient and a single correction step.
- Bitwise operators bridge sign-magnitude to two's complement for the
  duration of the operation and back.
- `BigInt` is deliberately not `Send`/`Sync` — the COW buffer uses a plain
  `Rc`, not `Arc`, so sharing a value across threads is a compile error
  rather than a silent atomic-refcount tax paid by single-threaded callers.
*/

mod arith;
mod big_int;
mod bitwise;
mod cmp;
mod div;
pub mod error;
mod limb_buf;
mod mul;
mod ops;
#[cfg(test)]
mod proptest;
mod shift;
mod short_ops;
mod text;

pub use big_int::BigInt;
pub use error::{BigIntError, Result};

//! Prime fields GF(p) = ℤ/pℤ.
//!
//! Elements are stored reduced in `0..P`. All arithmetic widens to `u64`
//! before reducing, so any `P < 2³²` is safe.
//!
//! Instantiating `Gf<P>` with a composite `P` fails at compile time.
//!
//! # Example
//!
//! ```
//! use liealg::field::{Field, Gf7};
//!
//! let a = Gf7::new(5);
//! let b = Gf7::new(4);
//! assert_eq!(a + b, Gf7::new(2));
//! assert_eq!(a * b, Gf7::new(6));
//! assert_eq!(-a, Gf7::new(2));
//! assert_eq!(a.inverse().map(|i| i * a), Some(Gf7::new(1)));
//! ```

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_traits::{One, Zero};

use super::Field;
use crate::error::{LieError, Result};

/// Trial-division primality test, usable in constant evaluation.
pub(crate) const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// An element of the prime field with `P` elements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Gf<const P: u32>(u32);

/// GF(2).
pub type Gf2 = Gf<2>;
/// GF(3).
pub type Gf3 = Gf<3>;
/// GF(5).
pub type Gf5 = Gf<5>;
/// GF(7).
pub type Gf7 = Gf<7>;

impl<const P: u32> Gf<P> {
    const PRIME: () = assert!(is_prime(P), "Gf<P> requires a prime modulus");

    /// Reduces an integer into the field.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::PRIME;
        Self(value.rem_euclid(P as i64) as u32)
    }

    /// Canonical representative in `0..P`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `self^exp` by square-and-multiply.
    #[must_use]
    pub const fn pow(self, mut exp: u64) -> Self {
        let p = P as u64;
        let mut base = self.0 as u64 % p;
        let mut acc = 1u64 % p;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % p;
            }
            base = base * base % p;
            exp >>= 1;
        }
        Self(acc as u32)
    }
}

impl<const P: u32> Add for Gf<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(((self.0 as u64 + rhs.0 as u64) % P as u64) as u32)
    }
}

impl<const P: u32> Sub for Gf<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(((self.0 as u64 + P as u64 - rhs.0 as u64) % P as u64) as u32)
    }
}

impl<const P: u32> Mul for Gf<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as u64 * rhs.0 as u64) % P as u64) as u32)
    }
}

impl<const P: u32> Neg for Gf<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self((P - self.0) % P)
    }
}

impl<const P: u32> Zero for Gf<P> {
    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u32> One for Gf<P> {
    #[inline]
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u32> fmt::Debug for Gf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u32> fmt::Display for Gf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts an integer `n` or a fraction `n/d`, read as `n·d⁻¹`.
impl<const P: u32> FromStr for Gf<P> {
    type Err = LieError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LieError::ParseScalar(s.to_string());
        let integer = |t: &str| t.trim().parse::<i64>().map(Self::new).map_err(|_| invalid());
        match s.split_once('/') {
            None => integer(s),
            Some((n, d)) => {
                let n = integer(n)?;
                // d ≡ 0 (mod P) has no inverse
                let d = integer(d)?.inverse().ok_or_else(invalid)?;
                Ok(n * d)
            }
        }
    }
}

impl<const P: u32> Field for Gf<P> {
    fn name() -> String {
        format!("Finite Field of size {P}")
    }

    #[inline]
    fn characteristic() -> u64 {
        P as u64
    }

    fn inverse(&self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            // Fermat: a^(p-2) = a^(-1)
            Some(self.pow(P as u64 - 2))
        }
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        Self::new(n)
    }
}

//! The rational numbers ℚ as arbitrary-precision fractions.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::Field;

/// Arbitrary-precision rational numbers.
pub type Rational = BigRational;

/// Builds the rational `numer / denom` in lowest terms.
///
/// # Panics
///
/// Panics if `denom` is zero.
///
/// # Example
///
/// ```
/// use liealg::field::rational;
///
/// assert_eq!(rational(2, 4), rational(1, 2));
/// assert_eq!(rational(3, -6).to_string(), "-1/2");
/// ```
#[must_use]
pub fn rational(numer: i64, denom: i64) -> Rational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

impl Field for BigRational {
    fn name() -> String {
        "Rational Field".to_string()
    }

    #[inline]
    fn characteristic() -> u64 {
        0
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }

    #[inline]
    fn from_i64(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
}

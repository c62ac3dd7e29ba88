//! Base fields for structure coefficients and matrix entries.
//!
//! Every algorithm in the crate is generic over [`Field`]: exact addition,
//! multiplication, negation, inversion, and equality. Two families are
//! provided:
//!
//! | Type | Field | Characteristic |
//! |------|-------|----------------|
//! | [`Rational`] | ℚ (arbitrary precision) | 0 |
//! | [`Gf<P>`] | ℤ/pℤ | `P` |
//!
//! # Example
//!
//! ```
//! use liealg::field::{rational, Field, Gf5, Rational};
//!
//! let half = rational(1, 2);
//! assert_eq!(half.inverse(), Some(Rational::from_i64(2)));
//!
//! let three = Gf5::new(3);
//! assert_eq!(three.inverse(), Some(Gf5::new(2))); // 3·2 = 6 ≡ 1
//! assert_eq!(Gf5::characteristic(), 5);
//! ```

mod prime;
mod rational;

pub use prime::{Gf, Gf2, Gf3, Gf5, Gf7};
pub use rational::{rational, Rational};

use core::fmt;
use core::hash::Hash;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_traits::{One, Zero};

use crate::error::{LieError, Result};

/// An exact commutative field.
///
/// Implementors must satisfy the field axioms exactly; no rounding is
/// tolerated anywhere in the crate.
pub trait Field:
    Clone
    + PartialEq
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Human-readable name, e.g. `"Rational Field"`.
    fn name() -> String;

    /// Characteristic of the field; 0 for ℚ.
    fn characteristic() -> u64;

    /// Multiplicative inverse, or `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Image of an integer under the canonical ring map ℤ → F.
    fn from_i64(n: i64) -> Self;

    /// Parses a scalar from text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::ParseScalar`] if the field rejects the text.
    fn parse_scalar(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|_| LieError::ParseScalar(text.to_string()))
    }
}

//! Dense coefficient vectors.

use core::fmt;
use core::ops::{Add, Index, Neg, Sub};

use crate::field::Field;

/// A dense vector of field elements.
///
/// Elements of a Lie algebra are identified with their coefficient vectors
/// relative to the algebra's basis, so this is also the element type of
/// every [`LieAlgebraWithBasis`](crate::LieAlgebraWithBasis).
///
/// # Example
///
/// ```
/// use liealg::field::Rational;
/// use liealg::linalg::Vector;
///
/// let v = Vector::<Rational>::from_i64(&[1, 0, -2]);
/// let w = Vector::<Rational>::unit(3, 1);
/// assert_eq!((&v + &w).to_string(), "(1, 1, -2)");
/// assert_eq!(v.support().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Vector<F> {
    entries: Vec<F>,
}

impl<F: Field> Vector<F> {
    /// Wraps a list of coefficients.
    #[inline]
    #[must_use]
    pub fn new(entries: Vec<F>) -> Self {
        Self { entries }
    }

    /// The zero vector of length `len`.
    #[must_use]
    pub fn zero(len: usize) -> Self {
        Self {
            entries: vec![F::zero(); len],
        }
    }

    /// The `index`-th standard basis vector of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    pub fn unit(len: usize, index: usize) -> Self {
        let mut v = Self::zero(len);
        v.entries[index] = F::one();
        v
    }

    /// Builds a vector from integer coefficients.
    #[must_use]
    pub fn from_i64(coefficients: &[i64]) -> Self {
        Self {
            entries: coefficients.iter().map(|&c| F::from_i64(c)).collect(),
        }
    }

    /// Number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for the length-zero vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|c| c.is_zero())
    }

    /// The coordinates as a slice.
    #[inline]
    pub fn entries(&self) -> &[F] {
        &self.entries
    }

    /// Consumes the vector, returning its coordinates.
    #[inline]
    pub fn into_entries(self) -> Vec<F> {
        self.entries
    }

    /// Indices of the non-zero coordinates, in increasing order.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, _)| i)
    }

    /// `(index, coefficient)` pairs of the non-zero coordinates.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, &F)> + '_ {
        self.entries.iter().enumerate().filter(|(_, c)| !c.is_zero())
    }

    /// Index of the first non-zero coordinate.
    pub fn leading_index(&self) -> Option<usize> {
        self.entries.iter().position(|c| !c.is_zero())
    }

    /// Multiplies every coordinate by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &F) -> Self {
        if scalar.is_one() {
            return self.clone();
        }
        Self {
            entries: self
                .entries
                .iter()
                .map(|c| c.clone() * scalar.clone())
                .collect(),
        }
    }

    /// `self += scalar · other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn add_scaled(&mut self, scalar: &F, other: &Self) {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        if scalar.is_zero() {
            return;
        }
        for (a, b) in self.entries.iter_mut().zip(&other.entries) {
            if !b.is_zero() {
                *a = a.clone() + scalar.clone() * b.clone();
            }
        }
    }

    /// Standard bilinear pairing `Σ aᵢ bᵢ`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn dot(&self, other: &Self) -> F {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.entries
            .iter()
            .zip(&other.entries)
            .fold(F::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    }

    /// Linear combination `Σ cᵢ vᵢ` of vectors of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if a vector has a length other than `len`.
    pub fn combination<'v>(
        len: usize,
        terms: impl IntoIterator<Item = (&'v F, &'v Self)>,
    ) -> Self
    where
        F: 'v,
    {
        let mut acc = Self::zero(len);
        for (c, v) in terms {
            acc.add_scaled(c, v);
        }
        acc
    }
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &F {
        &self.entries[index]
    }
}

impl<F: Field> Add for &Vector<F> {
    type Output = Vector<F>;

    fn add(self, rhs: Self) -> Vector<F> {
        let mut out = self.clone();
        out.add_scaled(&F::one(), rhs);
        out
    }
}

impl<F: Field> Sub for &Vector<F> {
    type Output = Vector<F>;

    fn sub(self, rhs: Self) -> Vector<F> {
        let mut out = self.clone();
        out.add_scaled(&-F::one(), rhs);
        out
    }
}

impl<F: Field> Neg for &Vector<F> {
    type Output = Vector<F>;

    fn neg(self) -> Vector<F> {
        Vector {
            entries: self.entries.iter().map(|c| -c.clone()).collect(),
        }
    }
}

impl<F: Field> FromIterator<F> for Vector<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F: fmt::Display> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{rational, Gf3, Rational};

    #[test]
    fn arithmetic() {
        let v = Vector::<Rational>::from_i64(&[1, 2, 3]);
        let w = Vector::<Rational>::from_i64(&[3, 2, 1]);
        assert_eq!(&v + &w, Vector::from_i64(&[4, 4, 4]));
        assert_eq!(&v - &w, Vector::from_i64(&[-2, 0, 2]));
        assert_eq!(-&v, Vector::from_i64(&[-1, -2, -3]));
        assert_eq!(v.dot(&w), Rational::from_i64(10));
        assert_eq!(
            v.scale(&rational(1, 2)).to_string(),
            "(1/2, 1, 3/2)"
        );
    }

    #[test]
    fn leading_index_and_support() {
        let v = Vector::<Gf3>::from_i64(&[0, 3, 2, 0, 1]);
        assert_eq!(v.leading_index(), Some(2));
        assert_eq!(v.support().collect::<Vec<_>>(), vec![2, 4]);
        assert!(Vector::<Gf3>::zero(4).leading_index().is_none());
        assert!(Vector::<Gf3>::from_i64(&[3, 6]).is_zero());
    }

    #[test]
    fn combination_matches_manual_sum() {
        let a = Vector::<Rational>::unit(2, 0);
        let b = Vector::<Rational>::unit(2, 1);
        let two = Rational::from_i64(2);
        let minus = Rational::from_i64(-1);
        let c = Vector::combination(2, [(&two, &a), (&minus, &b)]);
        assert_eq!(c, Vector::from_i64(&[2, -1]));
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn mismatched_lengths_panic() {
        let a = Vector::<Rational>::zero(2);
        let b = Vector::<Rational>::zero(3);
        let _ = &a + &b;
    }
}

//! Non-commutative polynomials over a field.

use std::collections::BTreeMap;
use core::ops::{Add, Neg, Sub};

use crate::field::Field;

/// A monomial: generator indices in multiplication order. The empty word is `1`.
pub type Word = Vec<usize>;

/// A finite linear combination of [`Word`]s with non-zero coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NcPolynomial<F> {
    terms: BTreeMap<Word, F>,
}

impl<F: Field> NcPolynomial<F> {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// The constant `c`.
    #[must_use]
    pub fn constant(c: F) -> Self {
        Self::monomial(Word::new(), c)
    }

    /// `c · word`.
    #[must_use]
    pub fn monomial(word: Word, c: F) -> Self {
        let mut p = Self::zero();
        p.add_term(word, c);
        p
    }

    /// Builds a polynomial from `(word, coefficient)` pairs, merging repeats.
    pub fn from_terms(terms: impl IntoIterator<Item = (Word, F)>) -> Self {
        let mut p = Self::zero();
        for (w, c) in terms {
            p.add_term(w, c);
        }
        p
    }

    /// `self += c · word`, dropping the term if it cancels.
    pub fn add_term(&mut self, word: Word, c: F) {
        if c.is_zero() {
            return;
        }
        match self.terms.get_mut(&word) {
            Some(existing) => {
                let sum = existing.clone() + c;
                if sum.is_zero() {
                    self.terms.remove(&word);
                } else {
                    *existing = sum;
                }
            }
            None => {
                self.terms.insert(word, c);
            }
        }
    }

    /// True if there are no terms.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of non-zero terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `word`, zero if absent.
    pub fn coefficient(&self, word: &[usize]) -> F {
        self.terms.get(word).cloned().unwrap_or_else(F::zero)
    }

    /// Length of the longest word, `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().map(Vec::len).max()
    }

    /// Terms in word order.
    pub fn terms(&self) -> impl Iterator<Item = (&Word, &F)> + '_ {
        self.terms.iter()
    }

    pub(crate) fn into_terms(self) -> BTreeMap<Word, F> {
        self.terms
    }

    /// Every coefficient multiplied by `c`.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(w, a)| (w.clone(), a.clone() * c.clone()))
                .collect(),
        }
    }

    /// Largest generator index used, `None` if only constants occur.
    pub(crate) fn max_generator(&self) -> Option<usize> {
        self.terms.keys().flat_map(|w| w.iter().copied()).max()
    }
}

impl<F: Field> Default for NcPolynomial<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Field> Add for &NcPolynomial<F> {
    type Output = NcPolynomial<F>;

    fn add(self, rhs: Self) -> NcPolynomial<F> {
        let mut out = self.clone();
        for (w, c) in &rhs.terms {
            out.add_term(w.clone(), c.clone());
        }
        out
    }
}

impl<F: Field> Sub for &NcPolynomial<F> {
    type Output = NcPolynomial<F>;

    fn sub(self, rhs: Self) -> NcPolynomial<F> {
        let mut out = self.clone();
        for (w, c) in &rhs.terms {
            out.add_term(w.clone(), -c.clone());
        }
        out
    }
}

impl<F: Field> Neg for &NcPolynomial<F> {
    type Output = NcPolynomial<F>;

    fn neg(self) -> NcPolynomial<F> {
        NcPolynomial {
            terms: self
                .terms
                .iter()
                .map(|(w, c)| (w.clone(), -c.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Gf3, Rational};

    type Q = Rational;

    #[test]
    fn cancellation_removes_terms() {
        let mut p = NcPolynomial::<Q>::monomial(vec![0, 1], Q::from_i64(2));
        p.add_term(vec![0, 1], Q::from_i64(-2));
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
    }

    #[test]
    fn words_are_not_commuted() {
        let xy = NcPolynomial::<Q>::monomial(vec![0, 1], Q::from_i64(1));
        let yx = NcPolynomial::<Q>::monomial(vec![1, 0], Q::from_i64(1));
        let diff = &xy - &yx;
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.coefficient(&[1, 0]), Q::from_i64(-1));
        assert_eq!(diff.degree(), Some(2));
    }

    #[test]
    fn characteristic_three_cancels() {
        let p = NcPolynomial::<Gf3>::from_terms([(vec![2], Gf3::new(1)), (vec![2], Gf3::new(2))]);
        assert!(p.is_zero());
        let q = NcPolynomial::<Gf3>::constant(Gf3::new(2));
        assert_eq!(q.scale(&Gf3::new(2)), NcPolynomial::constant(Gf3::new(1)));
        assert_eq!((&q + &-&q), NcPolynomial::zero());
    }
}

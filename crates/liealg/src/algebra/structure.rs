//! Sparse structure coefficients of a Lie algebra relative to its basis.
//!
//! The table stores `[b_i, b_j]` only for pairs whose bracket is non-zero,
//! keyed by the pair ordered so that key `i` compares `≤` key `j` under the
//! algebra's [`basis_cmp`](crate::LieAlgebraWithBasis::basis_cmp). Every
//! other pair is recovered from alternation: `[b_j, b_i] = -[b_i, b_j]` and
//! `[b_i, b_i] = 0`.

use core::cmp::Ordering;
use std::collections::BTreeMap;

use super::LieAlgebraWithBasis;
use crate::field::Field;
use crate::linalg::Vector;

/// Non-zero brackets of basis pairs.
///
/// # Example
///
/// ```
/// use liealg::algebras::StructureConstantsAlgebra;
/// use liealg::field::Rational;
/// use liealg::LieAlgebraWithBasis;
///
/// let l = StructureConstantsAlgebra::<Rational>::two_dimensional_nonabelian();
/// let s = l.structure_coefficients();
/// assert_eq!(s.len(), 1);
/// assert_eq!(s.get(0, 1).map(|v| v.to_string()), Some("(1, 0)".to_string()));
/// assert_eq!(s.bracket_of(1, 0).to_string(), "(-1, 0)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StructureCoefficients<F> {
    dimension: usize,
    entries: BTreeMap<(usize, usize), Vector<F>>,
}

impl<F: Field> StructureCoefficients<F> {
    /// Evaluates the bracket on every unordered pair of distinct basis elements.
    pub fn compute<L>(algebra: &L) -> Self
    where
        L: LieAlgebraWithBasis<Scalar = F>,
    {
        let dimension = algebra.dimension();
        let mut entries = BTreeMap::new();
        for i in 0..dimension {
            for j in i + 1..dimension {
                let value = algebra.bracket_on_basis(i, j);
                if value.is_zero() {
                    continue;
                }
                if algebra.basis_cmp(i, j) == Ordering::Greater {
                    entries.insert((j, i), -&value);
                } else {
                    entries.insert((i, j), value);
                }
            }
        }
        Self { dimension, entries }
    }

    /// Builds a table from already-oriented entries; zero values are dropped.
    #[cfg(test)]
    pub(crate) fn from_entries(
        dimension: usize,
        entries: impl IntoIterator<Item = ((usize, usize), Vector<F>)>,
    ) -> Self {
        Self {
            dimension,
            entries: entries.into_iter().filter(|(_, v)| !v.is_zero()).collect(),
        }
    }

    /// Dimension of the algebra the table describes.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of non-zero basis brackets.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if every basis bracket vanishes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored value for the oriented pair `(i, j)`, without sign correction.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&Vector<F>> {
        self.entries.get(&(i, j))
    }

    /// `[b_i, b_j]` for any pair, negating reversed entries and filling zeros.
    pub fn bracket_of(&self, i: usize, j: usize) -> Vector<F> {
        if let Some(v) = self.entries.get(&(i, j)) {
            v.clone()
        } else if let Some(v) = self.entries.get(&(j, i)) {
            -v
        } else {
            Vector::zero(self.dimension)
        }
    }

    /// Oriented pairs and their brackets, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &Vector<F>)> + '_ {
        self.entries.iter()
    }

    /// Oriented pairs with a non-zero bracket.
    pub fn keys(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.keys().copied()
    }

    /// Bilinear extension: `[x, y] = Σ (x_i y_j − x_j y_i) [b_i, b_j]`.
    ///
    /// # Panics
    ///
    /// Panics if either vector's length differs from the dimension.
    pub fn bracket(&self, x: &Vector<F>, y: &Vector<F>) -> Vector<F> {
        assert_eq!(x.len(), self.dimension, "element length mismatch");
        assert_eq!(y.len(), self.dimension, "element length mismatch");
        let mut out = Vector::zero(self.dimension);
        for (&(i, j), value) in &self.entries {
            let c = x[i].clone() * y[j].clone() - x[j].clone() * y[i].clone();
            if !c.is_zero() {
                out.add_scaled(&c, value);
            }
        }
        out
    }
}

impl<F: Field> core::fmt::Debug for StructureCoefficients<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v.to_string())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebras::StructureConstantsAlgebra;
    use crate::field::Rational;

    type Q = Rational;

    #[test]
    fn keys_are_strictly_ordered_pairs() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let s = l.structure_coefficients();
        assert_eq!(s.len(), 3);
        for (i, j) in s.keys() {
            assert!(i < j);
        }
    }

    #[test]
    fn bracket_of_handles_orientation() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let s = l.structure_coefficients();
        for i in 0..3 {
            assert!(s.bracket_of(i, i).is_zero());
            for j in 0..3 {
                assert_eq!(s.bracket_of(i, j), -&s.bracket_of(j, i));
                assert_eq!(s.bracket_of(i, j), l.bracket_on_basis(i, j));
            }
        }
    }

    #[test]
    fn bilinear_extension() {
        let l = StructureConstantsAlgebra::<Q>::two_dimensional_nonabelian();
        let s = l.structure_coefficients();
        // [x + 2y, 3x - y] = -x·[x,y]... expand: 1·(-1)[x,y] + 2·3[y,x] = -7x
        let a = Vector::from_i64(&[1, 2]);
        let b = Vector::from_i64(&[3, -1]);
        assert_eq!(s.bracket(&a, &b), Vector::from_i64(&[-7, 0]));
    }

    #[test]
    fn abelian_table_is_empty() {
        let s = StructureCoefficients::<Q>::from_entries(3, [((0, 1), Vector::zero(3))]);
        assert!(s.is_empty());
        assert!(s.bracket(&Vector::unit(3, 0), &Vector::unit(3, 1)).is_zero());
    }
}

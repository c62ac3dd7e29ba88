//! Subspaces of `F^n` stored by an echelonized basis.

use core::fmt;

use super::{Matrix, Vector};
use crate::error::{LieError, Result};
use crate::field::Field;

/// A linear subspace of `F^degree`.
///
/// The basis matrix is always in reduced row echelon form with no zero
/// rows, so two subspaces are equal exactly when their basis matrices are.
///
/// # Example
///
/// ```
/// use liealg::field::Rational;
/// use liealg::linalg::{Subspace, Vector};
///
/// let s = Subspace::<Rational>::span(3, [
///     Vector::from_i64(&[2, 1, 0]),
///     Vector::from_i64(&[0, 1, 1]),
///     Vector::from_i64(&[2, 2, 1]),
/// ]).unwrap();
/// assert_eq!(s.dimension(), 2);
/// assert!(s.contains(&Vector::from_i64(&[2, 0, -1])));
/// assert!(!s.contains(&Vector::from_i64(&[0, 0, 1])));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Subspace<F> {
    basis: Matrix<F>,
    pivots: Vec<usize>,
}

impl<F: Field> Subspace<F> {
    /// The whole space `F^degree`.
    #[must_use]
    pub fn full(degree: usize) -> Self {
        Self {
            basis: Matrix::identity(degree),
            pivots: (0..degree).collect(),
        }
    }

    /// The zero subspace of `F^degree`.
    #[must_use]
    pub fn zero(degree: usize) -> Self {
        Self {
            basis: Matrix::zero(0, degree),
            pivots: Vec::new(),
        }
    }

    /// The span of `generators`, each of length `degree`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a generator has the wrong length.
    pub fn span(degree: usize, generators: impl IntoIterator<Item = Vector<F>>) -> Result<Self> {
        Ok(Self::from_matrix(Matrix::from_rows(degree, generators)?))
    }

    /// Span of internally produced vectors of length `degree`.
    pub(crate) fn span_of(degree: usize, generators: Vec<Vector<F>>) -> Self {
        Self::from_matrix(Matrix::from_row_vec(degree, generators))
    }

    /// The row space of `matrix`.
    #[must_use]
    pub fn from_matrix(mut matrix: Matrix<F>) -> Self {
        let pivots = matrix.echelonize();
        Self {
            basis: matrix.truncate_rows(pivots.len()),
            pivots,
        }
    }

    /// Dimension of the ambient space.
    #[inline]
    pub fn degree(&self) -> usize {
        self.basis.ncols()
    }

    /// Dimension of the subspace.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.basis.nrows()
    }

    /// True for the zero subspace.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dimension() == 0
    }

    /// True if the subspace is the whole ambient space.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.dimension() == self.degree()
    }

    /// Basis vectors as rows of a reduced echelon matrix.
    #[inline]
    pub fn basis_matrix(&self) -> &Matrix<F> {
        &self.basis
    }

    /// Pivot column of each basis row.
    #[inline]
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Basis vectors, in echelon order.
    pub fn basis(&self) -> Vec<Vector<F>> {
        self.basis.rows().collect()
    }

    /// Coefficients of `v` over the echelon basis, or `None` if `v` is not in
    /// the subspace or has the wrong length.
    pub fn coordinates(&self, v: &Vector<F>) -> Option<Vector<F>> {
        if v.len() != self.degree() {
            return None;
        }
        // With a reduced echelon basis the coefficient of row i is v[pivot_i].
        let coeffs: Vector<F> = self.pivots.iter().map(|&p| v[p].clone()).collect();
        let mut residual = v.clone();
        for (i, c) in coeffs.entries().iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            residual.add_scaled(&-c.clone(), &self.basis.row(i));
        }
        residual.is_zero().then_some(coeffs)
    }

    /// True if `v` lies in the subspace.
    pub fn contains(&self, v: &Vector<F>) -> bool {
        self.coordinates(v).is_some()
    }

    /// Vector with the given coefficients over the echelon basis.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] unless `coeffs.len() == self.dimension()`.
    pub fn from_coordinates(&self, coeffs: &Vector<F>) -> Result<Vector<F>> {
        if coeffs.len() != self.dimension() {
            return Err(LieError::DimensionMismatch {
                expected: self.dimension(),
                found: coeffs.len(),
            });
        }
        Ok(self.combine(coeffs.entries()))
    }

    /// `Σ cᵢ rowᵢ` for a caller that already checked `coeffs.len()`.
    pub(crate) fn combine(&self, coeffs: &[F]) -> Vector<F> {
        let mut v = Vector::zero(self.degree());
        for (i, c) in coeffs.iter().enumerate() {
            if !c.is_zero() {
                v.add_scaled(c, &self.basis.row(i));
            }
        }
        v
    }

    /// True if every basis vector of `self` lies in `other`.
    pub fn is_subspace_of(&self, other: &Self) -> bool {
        self.degree() == other.degree() && self.basis.rows().all(|r| other.contains(&r))
    }

    /// `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the degrees differ.
    pub fn sum(&self, other: &Self) -> Result<Self> {
        Self::span(self.degree(), self.basis.rows().chain(other.basis.rows()))
    }

    /// `self ∩ other`.
    ///
    /// Solves `Σ aᵢ uᵢ = Σ bⱼ wⱼ` through the kernel of the stacked bases.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the degrees differ.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        if self.degree() != other.degree() {
            return Err(LieError::DimensionMismatch {
                expected: self.degree(),
                found: other.degree(),
            });
        }
        let n = self.degree();
        let k = self.dimension();
        let columns = self.basis.rows().chain(other.basis.rows().map(|w| -&w));
        let system = Matrix::from_columns(n, columns)?;
        let kernel = system.right_kernel();
        let generators = kernel
            .rows()
            .map(|row| self.combine(&row.entries()[..k]))
            .collect();
        Ok(Self::span_of(n, generators))
    }
}

impl<F: Field> fmt::Display for Subspace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subspace of degree {} and dimension {}",
            self.degree(),
            self.dimension()
        )?;
        if self.dimension() > 0 {
            write!(f, " with basis matrix:\n{}", self.basis)?;
        }
        Ok(())
    }
}

impl<F: Field> fmt::Debug for Subspace<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

//! Dense matrices with exact Gaussian elimination.
//!
//! Row reduction always produces the *reduced* row echelon form with the
//! same tie-breaking: columns are scanned left to right, the pivot of a
//! column is the first remaining row with a non-zero entry, the pivot row is
//! normalized to a leading 1, and the column is cleared above and below.
//! Over an exact field this makes the echelon form canonical, so every
//! basis derived from it (product spaces, kernels) is reproducible.
//!
//! # Example
//!
//! ```
//! use liealg::field::Rational;
//! use liealg::linalg::Matrix;
//!
//! let m = Matrix::<Rational>::from_i64(2, 3, &[1, 2, 3, 2, 4, 6]);
//! assert_eq!(m.rank(), 1);
//!
//! let k = m.right_kernel();
//! assert_eq!(k.nrows(), 2);
//! for row in k.rows() {
//!     assert!(m.mul_vector(&row).is_zero());
//! }
//! ```

use core::fmt;
use core::ops::{Index, Mul};

use super::Vector;
use crate::error::{LieError, Result};
use crate::field::Field;

/// A dense row-major matrix.
///
/// Matrices with zero rows still remember their column count, which is
/// what lets an empty spanning set describe the zero subspace of a given
/// ambient dimension.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<F> {
    nrows: usize,
    ncols: usize,
    data: Vec<F>,
}

impl<F: Field> Matrix<F> {
    /// The `nrows × ncols` zero matrix.
    #[must_use]
    pub fn zero(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![F::zero(); nrows * ncols],
        }
    }

    /// The `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zero(n, n);
        for i in 0..n {
            m.data[i * n + i] = F::one();
        }
        m
    }

    /// Builds a matrix from row vectors, each of length `ncols`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a row has the wrong length.
    pub fn from_rows(ncols: usize, rows: impl IntoIterator<Item = Vector<F>>) -> Result<Self> {
        let mut data = Vec::new();
        let mut nrows = 0;
        for row in rows {
            if row.len() != ncols {
                return Err(LieError::DimensionMismatch {
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row.into_entries());
            nrows += 1;
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Rows produced internally, whose lengths are known to be `ncols`.
    pub(crate) fn from_row_vec(ncols: usize, rows: Vec<Vector<F>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == ncols));
        Self {
            nrows: rows.len(),
            ncols,
            data: rows.into_iter().flat_map(Vector::into_entries).collect(),
        }
    }

    /// Builds a matrix whose columns are the given vectors, each of length `nrows`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a column has the wrong length.
    pub fn from_columns(
        nrows: usize,
        columns: impl IntoIterator<Item = Vector<F>>,
    ) -> Result<Self> {
        Ok(Self::from_rows(nrows, columns)?.transpose())
    }

    /// Builds a matrix from integer entries in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `entries.len() != nrows * ncols`.
    #[must_use]
    pub fn from_i64(nrows: usize, ncols: usize, entries: &[i64]) -> Self {
        assert_eq!(entries.len(), nrows * ncols, "entry count mismatch");
        Self {
            nrows,
            ncols,
            data: entries.iter().map(|&e| F::from_i64(e)).collect(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// True for square matrices.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &F {
        &self.data[row * self.ncols + col]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[F] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as an owned vector.
    pub fn row(&self, i: usize) -> Vector<F> {
        Vector::new(self.row_slice(i).to_vec())
    }

    /// Column `j` as an owned vector.
    pub fn column(&self, j: usize) -> Vector<F> {
        (0..self.nrows).map(|i| self.get(i, j).clone()).collect()
    }

    /// All rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = Vector<F>> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.get(i, j).clone());
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            data,
        }
    }

    /// Matrix–vector product `M v`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.ncols()`.
    pub fn mul_vector(&self, v: &Vector<F>) -> Vector<F> {
        assert_eq!(v.len(), self.ncols, "matrix-vector dimension mismatch");
        (0..self.nrows)
            .map(|i| {
                self.row_slice(i)
                    .iter()
                    .zip(v.entries())
                    .fold(F::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Sum of the diagonal entries.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn trace(&self) -> F {
        assert!(self.is_square(), "trace of a non-square matrix");
        (0..self.nrows).fold(F::zero(), |acc, i| acc + self.get(i, i).clone())
    }

    /// True if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| c.is_zero())
    }

    /// True if the matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.nrows).all(|i| (i + 1..self.ncols).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// True for the identity matrix.
    pub fn is_one(&self) -> bool {
        self.is_square()
            && (0..self.nrows).all(|i| {
                (0..self.ncols).all(|j| {
                    let e = self.get(i, j);
                    if i == j {
                        e.is_one()
                    } else {
                        e.is_zero()
                    }
                })
            })
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    /// Row-reduces in place to reduced row echelon form.
    ///
    /// Returns the pivot columns in increasing order; their count is the rank.
    pub fn echelonize(&mut self) -> Vec<usize> {
        let mut pivots = Vec::new();
        let mut r = 0;
        for c in 0..self.ncols {
            if r == self.nrows {
                break;
            }
            let Some(p) = (r..self.nrows).find(|&i| !self.get(i, c).is_zero()) else {
                continue;
            };
            self.swap_rows(p, r);
            let Some(inv) = self.get(r, c).inverse() else {
                continue;
            };
            for j in c..self.ncols {
                let idx = r * self.ncols + j;
                self.data[idx] = self.data[idx].clone() * inv.clone();
            }
            for i in 0..self.nrows {
                if i == r {
                    continue;
                }
                let factor = self.get(i, c).clone();
                if factor.is_zero() {
                    continue;
                }
                for j in c..self.ncols {
                    let sub = factor.clone() * self.get(r, j).clone();
                    let idx = i * self.ncols + j;
                    self.data[idx] = self.data[idx].clone() - sub;
                }
            }
            pivots.push(c);
            r += 1;
        }
        pivots
    }

    /// Reduced row echelon form, leaving `self` untouched.
    #[must_use]
    pub fn echelon_form(&self) -> Self {
        let mut m = self.clone();
        m.echelonize();
        m
    }

    /// Pivot columns of the reduced row echelon form.
    pub fn pivots(&self) -> Vec<usize> {
        self.clone().echelonize()
    }

    /// Rank over the base field.
    pub fn rank(&self) -> usize {
        self.pivots().len()
    }

    /// The first `n` rows.
    #[must_use]
    pub fn truncate_rows(mut self, n: usize) -> Self {
        let n = n.min(self.nrows);
        self.data.truncate(n * self.ncols);
        self.nrows = n;
        self
    }

    /// Basis of `{ v : M v = 0 }`, as the rows of a matrix in reduced row
    /// echelon form with `self.ncols()` columns.
    pub fn right_kernel(&self) -> Self {
        let mut rref = self.clone();
        let pivots = rref.echelonize();
        let mut is_pivot = vec![false; self.ncols];
        for &p in &pivots {
            is_pivot[p] = true;
        }
        let mut basis = Vec::new();
        for free in (0..self.ncols).filter(|&c| !is_pivot[c]) {
            let mut entries = Vector::unit(self.ncols, free).into_entries();
            for (row, &p) in pivots.iter().enumerate() {
                entries[p] = -rref.get(row, free).clone();
            }
            basis.push(Vector::new(entries));
        }
        let mut kernel = Self {
            nrows: basis.len(),
            ncols: self.ncols,
            data: basis.into_iter().flat_map(Vector::into_entries).collect(),
        };
        kernel.echelonize();
        kernel
    }

    /// Determinant by elimination.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn determinant(&self) -> F {
        assert!(self.is_square(), "determinant of a non-square matrix");
        let n = self.nrows;
        let mut m = self.clone();
        let mut det = F::one();
        for c in 0..n {
            let Some(p) = (c..n).find(|&i| !m.get(i, c).is_zero()) else {
                return F::zero();
            };
            if p != c {
                m.swap_rows(p, c);
                det = -det;
            }
            let pivot = m.get(c, c).clone();
            let Some(inv) = pivot.inverse() else {
                return F::zero();
            };
            det = det * pivot;
            for i in c + 1..n {
                let factor = m.get(i, c).clone() * inv.clone();
                if factor.is_zero() {
                    continue;
                }
                for j in c..n {
                    let sub = factor.clone() * m.get(c, j).clone();
                    let idx = i * n + j;
                    m.data[idx] = m.data[idx].clone() - sub;
                }
            }
        }
        det
    }

    /// True if the matrix is square and not invertible.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn is_singular(&self) -> bool {
        assert!(self.is_square(), "singularity of a non-square matrix");
        self.rank() < self.nrows
    }
}

impl<F: Field> Mul for &Matrix<F> {
    type Output = Matrix<F>;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    fn mul(self, rhs: Self) -> Matrix<F> {
        assert_eq!(self.ncols, rhs.nrows, "matrix product dimension mismatch");
        let mut out: Matrix<F> = Matrix::zero(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let a = self.get(i, k);
                if a.is_zero() {
                    continue;
                }
                for j in 0..rhs.ncols {
                    let b = rhs.get(k, j);
                    if b.is_zero() {
                        continue;
                    }
                    let idx = i * rhs.ncols + j;
                    out.data[idx] = out.data[idx].clone() + a.clone() * b.clone();
                }
            }
        }
        out
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &F {
        &self.data[row * self.ncols + col]
    }
}

impl<F: fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows == 0 || self.ncols == 0 {
            return write!(f, "{} x {} matrix", self.nrows, self.ncols);
        }
        let cells: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let widths: Vec<usize> = (0..self.ncols)
            .map(|j| {
                (0..self.nrows)
                    .map(|i| cells[i * self.ncols + j].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>w$}", cells[i * self.ncols + j], w = widths[j])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<F: fmt::Display> fmt::Debug for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{}:\n{}", self.nrows, self.ncols, self)
    }
}

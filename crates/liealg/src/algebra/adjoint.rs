//! Adjoint representation and the Killing form.

use super::LieAlgebraWithBasis;
use crate::field::Field;
use crate::linalg::{Matrix, Vector};

/// Column `k` is `[x, b_k]`.
pub(super) fn adjoint_matrix<L: LieAlgebraWithBasis>(
    algebra: &L,
    x: &Vector<L::Scalar>,
) -> Matrix<L::Scalar> {
    let n = algebra.dimension();
    let columns = (0..n)
        .map(|k| algebra.bracket(x, &Vector::unit(n, k)))
        .collect();
    Matrix::from_row_vec(n, columns).transpose()
}

/// `tr(A·B)` without forming the product.
pub(super) fn trace_of_product<F: Field>(a: &Matrix<F>, b: &Matrix<F>) -> F {
    let mut acc = F::zero();
    for p in 0..a.nrows() {
        for q in 0..a.ncols() {
            acc = acc + a[(p, q)].clone() * b[(q, p)].clone();
        }
    }
    acc
}

/// Gram matrix `(tr(ad_{b_i} ad_{b_j}))_{i,j}`, reusing each `ad_{b_i}`.
pub(super) fn killing_form_matrix<L: LieAlgebraWithBasis>(algebra: &L) -> Matrix<L::Scalar> {
    let n = algebra.dimension();
    let ads: Vec<_> = algebra
        .basis()
        .iter()
        .map(|b| algebra.adjoint_matrix(b))
        .collect();
    let mut gram = Vec::with_capacity(n);
    for i in 0..n {
        let row = (0..n)
            .map(|j| trace_of_product(&ads[i], &ads[j]))
            .collect::<Vector<_>>();
        gram.push(row);
    }
    Matrix::from_row_vec(n, gram)
}

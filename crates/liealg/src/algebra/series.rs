//! Derived, lower central, and upper central series.
//!
//! Each series iterates one transition from an initial term and stops at
//! the first term whose dimension repeats the previous one (the repeat is
//! dropped) or once a term is zero-dimensional.

use tracing::trace;

use super::{LieAlgebraWithBasis, Subalgebra};
use crate::linalg::Subspace;

fn iterate<'a, L, S>(first: Subalgebra<'a, L>, mut step: S) -> Vec<Subalgebra<'a, L>>
where
    L: LieAlgebraWithBasis,
    S: FnMut(&Subalgebra<'a, L>) -> Subalgebra<'a, L>,
{
    let mut terms = vec![first];
    while let Some(last) = terms.last() {
        if last.dimension() == 0 {
            break;
        }
        let next = step(last);
        trace!(
            step = terms.len(),
            previous = last.dimension(),
            next = next.dimension(),
            "series step"
        );
        if next.dimension() == last.dimension() {
            break;
        }
        terms.push(next);
    }
    terms
}

/// `g ⊇ [g, g] ⊇ …`
pub(super) fn derived<'a, L: LieAlgebraWithBasis>(g: &Subalgebra<'a, L>) -> Vec<Subalgebra<'a, L>> {
    iterate(g.clone(), Subalgebra::derived_subalgebra)
}

/// `g ⊇ [g, g] ⊇ [g, [g, g]] ⊇ …`
pub(super) fn lower_central<'a, L: LieAlgebraWithBasis>(
    g: &Subalgebra<'a, L>,
) -> Vec<Subalgebra<'a, L>> {
    iterate(g.clone(), |current| {
        Subalgebra::from_subspace_unchecked(g.ambient(), g.product_space_unchecked(current))
    })
}

/// `0 ⊆ Z(L) ⊆ Z_2(L) ⊆ …`, growing until the dimension repeats.
pub(super) fn upper_central<L: LieAlgebraWithBasis>(algebra: &L) -> Vec<Subalgebra<'_, L>> {
    let full = algebra.as_subalgebra();
    let basis = full.basis();
    let mut terms = vec![Subalgebra::zero(algebra)];
    while let Some(last) = terms.last() {
        if last.is_full() {
            break;
        }
        let next = full.solve_into(&basis, last.subspace());
        trace!(
            step = terms.len(),
            previous = last.dimension(),
            next = next.dimension(),
            "upper central step"
        );
        if next.dimension() == last.dimension() {
            break;
        }
        terms.push(Subalgebra::from_subspace_unchecked(algebra, next));
    }
    terms
}

/// Re-borrows cached subspaces as subalgebras of `algebra`.
pub(super) fn attach<'a, L: LieAlgebraWithBasis>(
    algebra: &'a L,
    spaces: &[Subspace<L::Scalar>],
) -> Vec<Subalgebra<'a, L>> {
    spaces
        .iter()
        .map(|s| Subalgebra::from_subspace_unchecked(algebra, s.clone()))
        .collect()
}

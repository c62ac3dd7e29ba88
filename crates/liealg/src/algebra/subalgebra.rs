//! Subspaces of a Lie algebra, tied to their ambient algebra by reference.
//!
//! A [`Subalgebra`] is an echelonized basis in the ambient algebra's
//! coordinates plus a borrow of the ambient. The borrow is the only link:
//! the ambient owns nothing back, and the lifetime guarantees it outlives
//! every handle. Binary operations require both operands to borrow the same
//! ambient instance and report [`LieError::NoCommonAmbient`] otherwise.
//!
//! Despite the name, a value built by [`Subalgebra::from_generators`] is
//! only a subspace until [`is_closed`](Subalgebra::is_closed) says otherwise.
//! Everything computed here (product spaces, centralizers, normalizers,
//! series terms) is closed by construction.
//!
//! # Example
//!
//! ```
//! use liealg::algebras::StructureConstantsAlgebra;
//! use liealg::field::Rational;
//! use liealg::LieAlgebraWithBasis;
//!
//! let l = StructureConstantsAlgebra::<Rational>::sl2();
//! let h = l.subalgebra([l.generator("h").unwrap()]).unwrap();
//! assert_eq!(l.centralizer(&h).unwrap(), h);
//! assert_eq!(l.normalizer(&h).unwrap().dimension(), 1);
//!
//! let b = l.subalgebra([l.generator("e").unwrap(), l.generator("h").unwrap()]).unwrap();
//! assert!(b.is_closed());
//! assert_eq!(l.normalizer(&b).unwrap(), b);
//! ```

use core::fmt;

use super::LieAlgebraWithBasis;
use crate::error::{LieError, Result};
use crate::linalg::{Matrix, Subspace, Vector};

/// A subspace of the Lie algebra `L`, borrowed from it.
pub struct Subalgebra<'a, L: LieAlgebraWithBasis> {
    ambient: &'a L,
    space: Subspace<L::Scalar>,
}

impl<'a, L: LieAlgebraWithBasis> Subalgebra<'a, L> {
    /// All of `ambient`.
    #[must_use]
    pub fn full(ambient: &'a L) -> Self {
        Self {
            ambient,
            space: Subspace::full(ambient.dimension()),
        }
    }

    /// The zero subalgebra of `ambient`.
    #[must_use]
    pub fn zero(ambient: &'a L) -> Self {
        Self {
            ambient,
            space: Subspace::zero(ambient.dimension()),
        }
    }

    /// Span of `generators`, given in ambient coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a generator has the wrong length.
    pub fn from_generators<I>(ambient: &'a L, generators: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vector<L::Scalar>>,
    {
        Ok(Self {
            ambient,
            space: Subspace::span(ambient.dimension(), generators)?,
        })
    }

    /// Wraps an existing subspace of `ambient`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the subspace has the wrong degree.
    pub fn from_subspace(ambient: &'a L, space: Subspace<L::Scalar>) -> Result<Self> {
        if space.degree() != ambient.dimension() {
            return Err(LieError::DimensionMismatch {
                expected: ambient.dimension(),
                found: space.degree(),
            });
        }
        Ok(Self { ambient, space })
    }

    pub(crate) fn from_subspace_unchecked(ambient: &'a L, space: Subspace<L::Scalar>) -> Self {
        debug_assert_eq!(space.degree(), ambient.dimension());
        Self { ambient, space }
    }

    /// The algebra this subalgebra lives in.
    #[inline]
    pub fn ambient(&self) -> &'a L {
        self.ambient
    }

    /// The underlying subspace of the ambient coordinates.
    #[inline]
    pub fn subspace(&self) -> &Subspace<L::Scalar> {
        &self.space
    }

    pub(crate) fn into_subspace(self) -> Subspace<L::Scalar> {
        self.space
    }

    /// Dimension of the subalgebra.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    /// `dim L − dim self`.
    #[inline]
    pub fn codimension(&self) -> usize {
        self.space.degree() - self.space.dimension()
    }

    /// Echelonized basis, in ambient coordinates.
    pub fn basis(&self) -> Vec<Vector<L::Scalar>> {
        self.space.basis()
    }

    /// Basis vectors as rows.
    #[inline]
    pub fn basis_matrix(&self) -> &Matrix<L::Scalar> {
        self.space.basis_matrix()
    }

    /// True if `x` lies in the subalgebra.
    pub fn contains(&self, x: &Vector<L::Scalar>) -> bool {
        self.space.contains(x)
    }

    /// Coefficients of `x` over the subalgebra's basis, `None` if `x` is outside.
    pub fn coordinates(&self, x: &Vector<L::Scalar>) -> Option<Vector<L::Scalar>> {
        self.space.coordinates(x)
    }

    /// True if this is the whole ambient algebra.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.space.is_full()
    }

    /// True if `self ⊆ other`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn is_contained_in(&self, other: &Subalgebra<'_, L>) -> Result<bool> {
        self.check_ambient(other)?;
        Ok(self.space.is_subspace_of(&other.space))
    }

    fn check_ambient(&self, other: &Subalgebra<'_, L>) -> Result<()> {
        if core::ptr::eq(self.ambient, other.ambient) {
            Ok(())
        } else {
            Err(LieError::NoCommonAmbient)
        }
    }

    fn with_space(&self, space: Subspace<L::Scalar>) -> Self {
        Self {
            ambient: self.ambient,
            space,
        }
    }

    /// `[self, other]`: the span of `[b_i, c_j]` over both bases.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn product_space(&self, other: &Subalgebra<'_, L>) -> Result<Self> {
        self.check_ambient(other)?;
        Ok(self.with_space(self.product_space_unchecked(other)))
    }

    pub(crate) fn product_space_unchecked(&self, other: &Subalgebra<'_, L>) -> Subspace<L::Scalar> {
        let n = self.ambient.dimension();
        let left = self.basis();
        let right = other.basis();
        let mut rows = Vec::with_capacity(left.len() * right.len());
        for b in &left {
            for c in &right {
                rows.push(self.ambient.bracket(b, c));
            }
        }
        Subspace::span_of(n, rows)
    }

    /// `[self, self]`.
    pub fn derived_subalgebra(&self) -> Self {
        self.with_space(self.product_space_unchecked(self))
    }

    /// Elements of `self` that commute with every element of `s`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn centralizer(&self, s: &Subalgebra<'_, L>) -> Result<Self> {
        self.check_ambient(s)?;
        let zero = Subspace::zero(self.ambient.dimension());
        Ok(self.with_space(self.solve_into(&s.basis(), &zero)))
    }

    /// The center: `self.centralizer(self)`.
    pub fn center(&self) -> Self {
        let zero = Subspace::zero(self.ambient.dimension());
        self.with_space(self.solve_into(&self.basis(), &zero))
    }

    /// Elements `x` of `self` with `[x, v] ∈ V` for every `v ∈ V`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn normalizer(&self, v: &Subalgebra<'_, L>) -> Result<Self> {
        self.check_ambient(v)?;
        Ok(self.with_space(self.solve_into(&v.basis(), &v.space)))
    }

    /// `{x ∈ self : [x, r] ∈ target for every r in against}`.
    ///
    /// Unknowns are the coefficients `a` of `x` over `self`'s basis `s_i`,
    /// followed by one block of slack coefficients `y_l` per element `r_l`
    /// (block `l` at columns `m + t·l .. m + t·(l+1)`, `t = dim target`).
    /// Row `(l, k)` reads `Σ_i a_i [s_i, r_l]_k − Σ_j y_{l,j} (w_j)_k = 0`.
    /// The leading `m` coordinates of the kernel basis give the answer.
    pub(crate) fn solve_into(
        &self,
        against: &[Vector<L::Scalar>],
        target: &Subspace<L::Scalar>,
    ) -> Subspace<L::Scalar> {
        let n = self.ambient.dimension();
        let own = self.basis();
        let m = own.len();
        if m == 0 {
            return Subspace::zero(n);
        }
        let targets = target.basis();
        let t = targets.len();
        let width = m + t * against.len();

        let mut rows = Vec::with_capacity(against.len() * n);
        for (l, r) in against.iter().enumerate() {
            let brackets: Vec<_> = own.iter().map(|s| self.ambient.bracket(s, r)).collect();
            for k in 0..n {
                let mut row = Vector::zero(width).into_entries();
                for (i, br) in brackets.iter().enumerate() {
                    row[i] = br[k].clone();
                }
                for (j, w) in targets.iter().enumerate() {
                    row[m + t * l + j] = -w[k].clone();
                }
                rows.push(Vector::new(row));
            }
        }
        let kernel = Matrix::from_row_vec(width, rows).right_kernel();
        let generators = kernel
            .rows()
            .map(|row| self.space.combine(&row.entries()[..m]))
            .collect();
        Subspace::span_of(n, generators)
    }

    /// True if `[self, self] ⊆ self`.
    pub fn is_closed(&self) -> bool {
        self.product_space_unchecked(self).is_subspace_of(&self.space)
    }

    /// True if `[L, self] ⊆ self`.
    pub fn is_ideal(&self) -> bool {
        Self::full(self.ambient)
            .product_space_unchecked(self)
            .is_subspace_of(&self.space)
    }

    /// True if `[self, self] = 0`.
    pub fn is_abelian(&self) -> bool {
        self.product_space_unchecked(self).is_zero()
    }

    /// `self ∩ other`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn intersection(&self, other: &Subalgebra<'_, L>) -> Result<Self> {
        self.check_ambient(other)?;
        Ok(self.with_space(self.space.intersection(&other.space)?))
    }

    /// `self + other` as a subspace.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if the ambients differ.
    pub fn sum(&self, other: &Subalgebra<'_, L>) -> Result<Self> {
        self.check_ambient(other)?;
        Ok(self.with_space(self.space.sum(&other.space)?))
    }

    /// Derived series of `self`, uncached.
    pub fn derived_series(&self) -> Vec<Self> {
        super::series::derived(self)
    }

    /// Lower central series of `self`, uncached.
    pub fn lower_central_series(&self) -> Vec<Self> {
        super::series::lower_central(self)
    }

    /// True if the derived series of `self` reaches zero.
    pub fn is_solvable(&self) -> bool {
        self.derived_series().last().map_or(true, |s| s.dimension() == 0)
    }

    /// True if the lower central series of `self` reaches zero.
    pub fn is_nilpotent(&self) -> bool {
        self.lower_central_series()
            .last()
            .map_or(true, |s| s.dimension() == 0)
    }

    /// Renders each basis vector through the ambient's element formatting.
    pub fn display_basis(&self) -> Vec<String> {
        self.basis()
            .iter()
            .map(|b| self.ambient.display_element(b))
            .collect()
    }
}

impl<L: LieAlgebraWithBasis> Clone for Subalgebra<'_, L> {
    fn clone(&self) -> Self {
        self.with_space(self.space.clone())
    }
}

impl<L: LieAlgebraWithBasis> PartialEq for Subalgebra<'_, L> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.ambient, other.ambient) && self.space == other.space
    }
}

impl<L: LieAlgebraWithBasis> Eq for Subalgebra<'_, L> {}

impl<L: LieAlgebraWithBasis> fmt::Debug for Subalgebra<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subalgebra")
            .field("dimension", &self.dimension())
            .field("basis", &self.display_basis())
            .finish()
    }
}

impl<L: LieAlgebraWithBasis> fmt::Display for Subalgebra<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subalgebra of dimension {} with basis ({})",
            self.dimension(),
            self.display_basis().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebras::{AbelianLieAlgebra, StructureConstantsAlgebra};
    use crate::field::{Gf2, Rational};

    type Q = Rational;

    fn span<'a, L: LieAlgebraWithBasis<Scalar = Q>>(l: &'a L, names: &[&str]) -> Subalgebra<'a, L> {
        l.subalgebra(names.iter().map(|n| l.generator(n).unwrap()))
            .unwrap()
    }

    #[test]
    fn product_space_of_sl2() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let full = l.as_subalgebra();
        assert!(full.product_space(&full).unwrap().is_full());
        let e = span(&l, &["e"]);
        let f = span(&l, &["f"]);
        assert_eq!(e.product_space(&f).unwrap(), span(&l, &["h"]));
        assert_eq!(e.product_space(&e).unwrap().dimension(), 0);
    }

    #[test]
    fn different_ambients_are_rejected() {
        let a = StructureConstantsAlgebra::<Q>::sl2();
        let b = StructureConstantsAlgebra::<Q>::sl2();
        let err = a.as_subalgebra().product_space(&b.as_subalgebra());
        assert_eq!(err, Err(LieError::NoCommonAmbient));
        assert_eq!(a.centralizer(&b.center()), Err(LieError::NoCommonAmbient));
        assert_ne!(a.as_subalgebra(), b.as_subalgebra());
    }

    #[test]
    fn heisenberg_center() {
        let l = StructureConstantsAlgebra::<Q>::heisenberg(1);
        let z = l.center();
        assert_eq!(z, span(&l, &["z"]));
        for b in l.basis() {
            for c in z.basis() {
                assert!(l.bracket(&b, &c).is_zero());
            }
        }
        assert!(z.is_ideal());
        assert!(z.is_abelian());
    }

    #[test]
    fn centralizer_of_a_generator() {
        let l = StructureConstantsAlgebra::<Q>::heisenberg(1);
        let p = span(&l, &["p1"]);
        assert_eq!(l.centralizer(&p).unwrap(), span(&l, &["p1", "z"]));
    }

    #[test]
    fn normalizer_of_a_non_ideal() {
        // [x, y] = x: span(y) is normalized only by itself.
        let l = StructureConstantsAlgebra::<Q>::two_dimensional_nonabelian();
        let y = span(&l, &["y"]);
        assert_eq!(l.normalizer(&y).unwrap(), y);
        let x = span(&l, &["x"]);
        assert!(l.normalizer(&x).unwrap().is_full());
        assert!(x.is_ideal());
        assert!(!y.is_ideal());
    }

    #[test]
    fn zero_dimensional_operands() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let zero = Subalgebra::zero(&l);
        assert!(l.centralizer(&zero).unwrap().is_full());
        assert!(l.normalizer(&zero).unwrap().is_full());
        assert_eq!(zero.centralizer(&l.as_subalgebra()).unwrap(), zero);
        assert_eq!(zero.normalizer(&l.as_subalgebra()).unwrap(), zero);
        assert_eq!(zero.center(), zero);
        assert_eq!(zero.derived_subalgebra(), zero);
    }

    #[test]
    fn subalgebra_of_subalgebra_operations_stay_in_range() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let b = span(&l, &["e", "h"]);
        let h = span(&l, &["h"]);
        // Inside the Borel, h is self-centralizing and e commutes only with e.
        assert_eq!(b.centralizer(&h).unwrap(), h);
        assert_eq!(b.centralizer(&span(&l, &["e"])).unwrap(), span(&l, &["e"]));
        assert_eq!(b.derived_subalgebra(), span(&l, &["e"]));
        assert!(b.is_solvable());
        assert!(!b.is_nilpotent());
    }

    #[test]
    fn lattice_operations() {
        let l = AbelianLieAlgebra::<Q>::new("x,y,z").unwrap();
        let xy = l
            .subalgebra([l.generator("x").unwrap(), l.generator("y").unwrap()])
            .unwrap();
        let yz = l
            .subalgebra([l.generator("y").unwrap(), l.generator("z").unwrap()])
            .unwrap();
        let y = xy.intersection(&yz).unwrap();
        assert_eq!(y.dimension(), 1);
        assert!(y.is_contained_in(&xy).unwrap());
        assert!(xy.sum(&yz).unwrap().is_full());
        assert_eq!(xy.codimension(), 1);
        assert_eq!(
            xy.coordinates(&l.generator("y").unwrap()),
            Some(Vector::from_i64(&[0, 1]))
        );
    }

    #[test]
    fn closure_is_detected() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        assert!(!span(&l, &["e", "f"]).is_closed());
        assert!(span(&l, &["e", "h"]).is_closed());
    }

    #[test]
    fn display_uses_basis_names() {
        let l = StructureConstantsAlgebra::<Q>::sl2();
        let s = l
            .subalgebra([Vector::from_i64(&[2, 0, 2]), l.generator("h").unwrap()])
            .unwrap();
        assert_eq!(
            s.to_string(),
            "Subalgebra of dimension 2 with basis (e + f, h)"
        );
    }

    #[test]
    fn centralizer_in_characteristic_two() {
        // Over GF(2), [h, e] = 2e = 0, so h is central in sl2.
        let l = StructureConstantsAlgebra::<Gf2>::sl2();
        let z = l.center();
        assert_eq!(z.dimension(), 1);
        assert!(z.contains(&l.generator("h").unwrap()));
    }
}

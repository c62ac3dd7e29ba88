//! The [`LieAlgebraWithBasis`] capability and the algorithms built on it.
//!
//! An implementer supplies three things: the ordered basis keys, the
//! bracket of two basis elements, and a [`LieCache`] to memoize derived
//! data in. Everything else (structure coefficients, adjoint action,
//! Killing form, centralizers, normalizers, series, the universal
//! enveloping algebra) is provided once here and works for any
//! implementer.
//!
//! Elements are [`Vector`]s of coefficients over the basis. Operations
//! that take elements panic if a vector's length differs from
//! [`dimension`](LieAlgebraWithBasis::dimension), the same way slice
//! indexing does; [`element`](LieAlgebraWithBasis::element) is the checked
//! constructor.
//!
//! # Example
//!
//! ```
//! use liealg::algebras::StructureConstantsAlgebra;
//! use liealg::field::Rational;
//! use liealg::LieAlgebraWithBasis;
//!
//! // [x, y] = x
//! let l = StructureConstantsAlgebra::<Rational>::two_dimensional_nonabelian();
//! let dims: Vec<_> = l.derived_series().iter().map(|s| s.dimension()).collect();
//! assert_eq!(dims, vec![2, 1, 0]);
//! assert!(l.is_solvable());
//! assert!(!l.is_nilpotent());
//! ```

mod adjoint;
mod series;
mod structure;
mod subalgebra;

pub use structure::StructureCoefficients;
pub use subalgebra::Subalgebra;

use core::cmp::Ordering;
use core::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{LieError, Result};
use crate::field::Field;
use crate::linalg::{Matrix, Subspace, Vector};
use crate::uea::GAlgebra;

/// Memoized data for one algebra instance.
///
/// Each cell is filled on first use and never invalidated: an algebra's
/// basis and bracket are fixed at construction. Cloning an algebra gives the
/// clone an empty cache.
pub struct LieCache<F> {
    structure: OnceLock<StructureCoefficients<F>>,
    killing: OnceLock<Matrix<F>>,
    derived: OnceLock<Subspace<F>>,
    derived_series: OnceLock<Vec<Subspace<F>>>,
    lower_central: OnceLock<Vec<Subspace<F>>>,
    uea: OnceLock<GAlgebra<F>>,
}

impl<F> LieCache<F> {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structure: OnceLock::new(),
            killing: OnceLock::new(),
            derived: OnceLock::new(),
            derived_series: OnceLock::new(),
            lower_central: OnceLock::new(),
            uea: OnceLock::new(),
        }
    }
}

impl<F> Default for LieCache<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for LieCache<F> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for LieCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LieCache")
            .field("structure", &self.structure.get().is_some())
            .field("killing", &self.killing.get().is_some())
            .field("derived", &self.derived.get().is_some())
            .field("derived_series", &self.derived_series.get().is_some())
            .field("lower_central", &self.lower_central.get().is_some())
            .field("uea", &self.uea.get().is_some())
            .finish()
    }
}

/// A finite-dimensional Lie algebra with a distinguished ordered basis.
///
/// # Contract
///
/// - `bracket_on_basis(i, j)` has length [`dimension`](Self::dimension),
///   is alternating (`[b_i, b_i] = 0`, `[b_j, b_i] = -[b_i, b_j]`) and
///   satisfies the Jacobi identity.
/// - [`basis_cmp`](Self::basis_cmp), if overridden, is a total order.
///   An inconsistent comparator is not detected and produces wrong signs.
pub trait LieAlgebraWithBasis: Sized {
    /// The base field.
    type Scalar: Field;

    /// Basis keys in their fixed order; also the generator names.
    fn ordered_indices(&self) -> &[String];

    /// Coefficient vector of `[b_i, b_j]`.
    fn bracket_on_basis(&self, i: usize, j: usize) -> Vector<Self::Scalar>;

    /// Storage for memoized results.
    fn cache(&self) -> &LieCache<Self::Scalar>;

    /// Total order on basis keys used to orient structure coefficients.
    fn basis_cmp(&self, i: usize, j: usize) -> Ordering {
        i.cmp(&j)
    }

    /// Basis of the underlying free module, as rows over its ambient
    /// coordinates. The identity unless the algebra sits inside a larger module.
    fn basis_matrix(&self) -> Matrix<Self::Scalar> {
        Matrix::identity(self.dimension())
    }

    /// Number of basis elements.
    #[inline]
    fn dimension(&self) -> usize {
        self.ordered_indices().len()
    }

    /// The zero element.
    fn zero(&self) -> Vector<Self::Scalar> {
        Vector::zero(self.dimension())
    }

    /// The basis elements `b_0, …, b_{n-1}`.
    fn basis(&self) -> Vec<Vector<Self::Scalar>> {
        let n = self.dimension();
        (0..n).map(|i| Vector::unit(n, i)).collect()
    }

    /// Element with the given coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the number of coefficients
    /// differs from the dimension.
    fn element(&self, coefficients: Vec<Self::Scalar>) -> Result<Vector<Self::Scalar>> {
        if coefficients.len() != self.dimension() {
            return Err(LieError::DimensionMismatch {
                expected: self.dimension(),
                found: coefficients.len(),
            });
        }
        Ok(Vector::new(coefficients))
    }

    /// The basis element named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::UnknownGenerator`] if no basis key is `name`.
    fn generator(&self, name: &str) -> Result<Vector<Self::Scalar>> {
        self.ordered_indices()
            .iter()
            .position(|k| k == name)
            .map(|i| Vector::unit(self.dimension(), i))
            .ok_or_else(|| LieError::UnknownGenerator(name.to_string()))
    }

    /// Coefficient vector of `x`. Elements already are their coefficient
    /// vectors, so this is a copy.
    fn to_vector(&self, x: &Vector<Self::Scalar>) -> Vector<Self::Scalar> {
        x.clone()
    }

    /// `[x, y]`, extended bilinearly from the structure coefficients.
    ///
    /// # Panics
    ///
    /// Panics if either element has the wrong length.
    fn bracket(&self, x: &Vector<Self::Scalar>, y: &Vector<Self::Scalar>) -> Vector<Self::Scalar> {
        self.structure_coefficients().bracket(x, y)
    }

    /// Renders `x` as a linear combination of the basis keys, e.g. `x - 1/2*y`.
    fn display_element(&self, x: &Vector<Self::Scalar>) -> String {
        let names = self.ordered_indices();
        write_combination(x.iter_nonzero().map(|(i, c)| (c, names[i].as_str())))
    }

    /// Non-zero brackets of basis pairs, oriented by [`basis_cmp`](Self::basis_cmp).
    fn structure_coefficients(&self) -> &StructureCoefficients<Self::Scalar> {
        self.cache().structure.get_or_init(|| {
            let s = StructureCoefficients::compute(self);
            debug!(
                dimension = self.dimension(),
                nonzero = s.len(),
                "computed structure coefficients"
            );
            s
        })
    }

    /// Matrix of `ad_x`: column `k` is `[x, b_k]`.
    fn adjoint_matrix(&self, x: &Vector<Self::Scalar>) -> Matrix<Self::Scalar> {
        adjoint::adjoint_matrix(self, x)
    }

    /// `ad_x · ad_y`.
    fn killing_matrix(
        &self,
        x: &Vector<Self::Scalar>,
        y: &Vector<Self::Scalar>,
    ) -> Matrix<Self::Scalar> {
        &self.adjoint_matrix(x) * &self.adjoint_matrix(y)
    }

    /// `tr(ad_x ∘ ad_y)`.
    fn killing_form(&self, x: &Vector<Self::Scalar>, y: &Vector<Self::Scalar>) -> Self::Scalar {
        adjoint::trace_of_product(&self.adjoint_matrix(x), &self.adjoint_matrix(y))
    }

    /// Gram matrix of the Killing form on the basis. Computed once; callers
    /// receive a shared reference and must clone to transform it.
    fn killing_form_matrix(&self) -> &Matrix<Self::Scalar> {
        self.cache().killing.get_or_init(|| {
            let m = adjoint::killing_form_matrix(self);
            debug!(dimension = self.dimension(), "computed Killing form matrix");
            m
        })
    }

    /// Cartan's criterion: the Killing form is non-degenerate.
    ///
    /// Only meaningful in characteristic 0. Over GF(p) the answer can be
    /// wrong in either direction.
    fn is_semisimple(&self) -> bool {
        let p = Self::Scalar::characteristic();
        if p != 0 {
            debug!(
                characteristic = p,
                "Killing form criterion used in positive characteristic"
            );
        }
        !self.killing_form_matrix().is_singular()
    }

    /// The algebra as a subalgebra of itself.
    fn as_subalgebra(&self) -> Subalgebra<'_, Self> {
        Subalgebra::full(self)
    }

    /// Span of `generators` inside this algebra. The span is a subspace; it
    /// is bracket-closed only if the generators make it so.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a generator has the wrong length.
    fn subalgebra<I>(&self, generators: I) -> Result<Subalgebra<'_, Self>>
    where
        I: IntoIterator<Item = Vector<Self::Scalar>>,
    {
        Subalgebra::from_generators(self, generators)
    }

    /// `[L, other]`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if `other` lives in a different algebra.
    fn product_space(&self, other: &Subalgebra<'_, Self>) -> Result<Subalgebra<'_, Self>> {
        self.as_subalgebra().product_space(other)
    }

    /// `[L, L]`, cached.
    fn derived_subalgebra(&self) -> Subalgebra<'_, Self> {
        let space = self
            .cache()
            .derived
            .get_or_init(|| self.as_subalgebra().product_space_unchecked(&self.as_subalgebra()));
        Subalgebra::from_subspace_unchecked(self, space.clone())
    }

    /// `{x ∈ L : [x, s] = 0 for all s ∈ S}`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if `s` lives in a different algebra.
    fn centralizer(&self, s: &Subalgebra<'_, Self>) -> Result<Subalgebra<'_, Self>> {
        self.as_subalgebra().centralizer(s)
    }

    /// The center `Z(L)`.
    fn center(&self) -> Subalgebra<'_, Self> {
        self.as_subalgebra().center()
    }

    /// `{x ∈ L : [x, V] ⊆ V}`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoCommonAmbient`] if `v` lives in a different algebra.
    fn normalizer(&self, v: &Subalgebra<'_, Self>) -> Result<Subalgebra<'_, Self>> {
        self.as_subalgebra().normalizer(v)
    }

    /// `L ⊇ [L, L] ⊇ [[L, L], [L, L]] ⊇ …` up to the first repeated
    /// dimension or the zero subalgebra. Cached.
    fn derived_series(&self) -> Vec<Subalgebra<'_, Self>> {
        let spaces = self.cache().derived_series.get_or_init(|| {
            let terms = series::derived(&self.as_subalgebra());
            debug!(length = terms.len(), "computed derived series");
            terms.into_iter().map(Subalgebra::into_subspace).collect()
        });
        series::attach(self, spaces)
    }

    /// `L ⊇ [L, L] ⊇ [L, [L, L]] ⊇ …` with the same termination rule. Cached.
    fn lower_central_series(&self) -> Vec<Subalgebra<'_, Self>> {
        let spaces = self.cache().lower_central.get_or_init(|| {
            let terms = series::lower_central(&self.as_subalgebra());
            debug!(length = terms.len(), "computed lower central series");
            terms.into_iter().map(Subalgebra::into_subspace).collect()
        });
        series::attach(self, spaces)
    }

    /// `0 = Z_0 ⊆ Z_1 = Z(L) ⊆ Z_2 ⊆ …` where `Z_{i+1} = {x : [x, L] ⊆ Z_i}`,
    /// up to the first repeated dimension.
    fn upper_central_series(&self) -> Vec<Subalgebra<'_, Self>> {
        series::upper_central(self)
    }

    /// True if every basis bracket vanishes.
    fn is_abelian(&self) -> bool {
        self.structure_coefficients().is_empty()
    }

    /// True if the derived series reaches zero.
    fn is_solvable(&self) -> bool {
        terminates_at_zero(&self.derived_series())
    }

    /// True if the lower central series reaches zero.
    fn is_nilpotent(&self) -> bool {
        terminates_at_zero(&self.lower_central_series())
    }

    /// Number of steps for the derived series to reach zero, if it does.
    fn derived_length(&self) -> Option<usize> {
        let s = self.derived_series();
        terminates_at_zero(&s).then(|| s.len() - 1)
    }

    /// Number of steps for the lower central series to reach zero, if it does.
    fn nilpotency_class(&self) -> Option<usize> {
        let s = self.lower_central_series();
        terminates_at_zero(&s).then(|| s.len() - 1)
    }

    /// The universal enveloping algebra, as a g-algebra on the basis names.
    ///
    /// For each structure coefficient `(a, b) ↦ v` the relation is
    /// `b_b b_a = b_a b_b - v` when `a < b`, and `b_a b_b = b_b b_a + v`
    /// otherwise. Pairs without a relation commute. Cached.
    fn construct_uea(&self) -> &GAlgebra<Self::Scalar> {
        self.cache().uea.get_or_init(|| {
            let uea = crate::uea::from_structure_coefficients(
                generator_names(self.ordered_indices()),
                self.structure_coefficients(),
            );
            debug!(
                generators = self.dimension(),
                relations = uea.relation_count(),
                "constructed universal enveloping algebra"
            );
            uea
        })
    }

    /// Image of `x` in the universal enveloping algebra (a linear polynomial).
    fn lift(&self, x: &Vector<Self::Scalar>) -> crate::uea::NcPolynomial<Self::Scalar> {
        self.construct_uea().linear(x)
    }
}

fn terminates_at_zero<L: LieAlgebraWithBasis>(series: &[Subalgebra<'_, L>]) -> bool {
    series.last().map_or(true, |s| s.dimension() == 0)
}

/// Basis keys as UEA generator names, with positional names `b0, b1, …`
/// when the keys are blank or repeat.
fn generator_names(indices: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let usable = indices
        .iter()
        .all(|k| !k.trim().is_empty() && seen.insert(k.as_str()));
    if usable {
        indices.to_vec()
    } else {
        (0..indices.len()).map(|i| format!("b{i}")).collect()
    }
}

/// Formats `Σ cᵢ·termᵢ` in the usual way: coefficient one omitted, minus
/// signs folded into the separator, `0` for the empty sum.
pub(crate) fn write_combination<'t, F: Field>(
    terms: impl IntoIterator<Item = (&'t F, &'t str)>,
) -> String {
    let mut out = String::new();
    for (c, term) in terms {
        if c.is_zero() {
            continue;
        }
        let text = c.to_string();
        let (negative, magnitude) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, text),
        };
        match (out.is_empty(), negative) {
            (true, true) => out.push('-'),
            (true, false) => {}
            (false, true) => out.push_str(" - "),
            (false, false) => out.push_str(" + "),
        }
        if term.is_empty() {
            out.push_str(&magnitude);
        } else if magnitude == "1" {
            out.push_str(term);
        } else {
            out.push_str(&magnitude);
            out.push('*');
            out.push_str(term);
        }
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

//! Universal enveloping algebras as g-algebras.
//!
//! [`FreeAlgebra`] holds generator names; [`FreeAlgebra::g_algebra`]
//! quotients it by commutation relations and yields a [`GAlgebra`], whose
//! elements are [`NcPolynomial`]s kept in PBW normal form (generator
//! indices non-decreasing along every word).
//!
//! [`LieAlgebraWithBasis::construct_uea`](crate::LieAlgebraWithBasis::construct_uea)
//! builds one relation per non-zero structure coefficient, so that
//! `x y − y x = [x, y]` holds for every pair of basis elements.
//!
//! # Example
//!
//! ```
//! use liealg::algebras::StructureConstantsAlgebra;
//! use liealg::field::Rational;
//! use liealg::LieAlgebraWithBasis;
//!
//! let sl2 = StructureConstantsAlgebra::<Rational>::sl2();
//! let u = sl2.construct_uea();
//! let e = u.generator("e").unwrap();
//! let f = u.generator("f").unwrap();
//! assert_eq!(u.display(&u.commutator(&e, &f)), "h");
//! assert_eq!(u.display(&u.mul(&f, &e)), "e*f - h");
//! ```

mod g_algebra;
mod polynomial;

pub use g_algebra::{FreeAlgebra, GAlgebra};
pub use polynomial::{NcPolynomial, Word};

use crate::algebra::StructureCoefficients;
use crate::field::Field;

/// Relations `x_b x_a = x_a x_b − v` (for `a < b`) or `x_a x_b = x_b x_a + v`
/// (for `a > b`) from each structure coefficient `(a, b) ↦ v`.
pub(crate) fn from_structure_coefficients<F: Field>(
    names: Vec<String>,
    structure: &StructureCoefficients<F>,
) -> GAlgebra<F> {
    let linear = |v: &crate::linalg::Vector<F>| {
        NcPolynomial::from_terms(v.iter_nonzero().map(|(k, c)| (vec![k], c.clone())))
    };
    let relations = structure.iter().map(|(&(a, b), v)| {
        if a < b {
            ((b, a), -&linear(v))
        } else {
            ((a, b), linear(v))
        }
    });
    GAlgebra::from_commutators(names, relations)
}

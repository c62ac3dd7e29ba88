//! liealg - Finite-dimensional Lie algebras with a distinguished basis
//!
//! Structural invariants of a Lie algebra (solvability, nilpotency,
//! semisimplicity, centers, normalizers, the universal enveloping algebra)
//! are derived purely from its structure coefficients. An algebra only has
//! to name its basis and bracket two basis elements; every algorithm is
//! written once against [`LieAlgebraWithBasis`].
//!
//! # Layers
//!
//! ```text
//! field     exact scalars: ℚ (BigRational) and GF(p)
//! linalg    Vector, Matrix (RREF, kernel, trace, determinant), Subspace
//! algebra   LieAlgebraWithBasis, StructureCoefficients, Subalgebra, series
//! uea       FreeAlgebra, GAlgebra, NcPolynomial (PBW normal forms)
//! algebras  AbelianLieAlgebra, StructureConstantsAlgebra, classical examples
//! ```
//!
//! # Conventions
//!
//! | Quantity | Convention |
//! |----------|------------|
//! | Element | coefficient [`Vector`] over the basis |
//! | `adjoint_matrix(x)` | column `k` is `[x, b_k]` |
//! | Structure coefficients | key `(i, j)` with `i` before `j` under `basis_cmp` |
//! | Subspace basis | reduced row echelon form, no zero rows |
//! | Series | stop at the first repeated dimension or at zero |
//!
//! # Example: solvable but not nilpotent
//!
//! ```
//! use liealg::prelude::*;
//!
//! let l = StructureConstantsAlgebra::<Rational>::builder("x,y")
//!     .bracket_i64("x", "y", &[("x", 1)])
//!     .build()
//!     .unwrap();
//!
//! let derived: Vec<_> = l.derived_series().iter().map(|s| s.dimension()).collect();
//! assert_eq!(derived, vec![2, 1, 0]);
//! assert!(l.is_solvable());
//!
//! let lower: Vec<_> = l.lower_central_series().iter().map(|s| s.dimension()).collect();
//! assert_eq!(lower, vec![2, 1]);
//! assert!(!l.is_nilpotent());
//! ```
//!
//! # Example: Cartan's criterion
//!
//! ```
//! use liealg::prelude::*;
//!
//! let sl2 = StructureConstantsAlgebra::<Rational>::sl2();
//! assert!(sl2.is_semisimple());
//! assert_eq!(sl2.killing_form_matrix().to_string(), "[0 0 4]\n[0 8 0]\n[4 0 0]");
//! ```
//!
//! # Positive characteristic
//!
//! Everything is exact over `Gf<P>`, but `is_semisimple` uses the Killing
//! form criterion, which is only valid in characteristic 0.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

// Error type and result alias
pub mod error;

// Base fields (rational, prime)
pub mod field;

// Exact linear algebra (vector, matrix, subspace)
pub mod linalg;

// Lie algebra capability and generic algorithms
pub mod algebra;

// Universal enveloping algebras
pub mod uea;

// Concrete algebras (abelian, structure constants, classical)
pub mod algebras;

pub use algebra::{LieAlgebraWithBasis, LieCache, StructureCoefficients, Subalgebra};
pub use error::{LieError, Result};
pub use field::{Field, Gf, Rational};
pub use linalg::{Matrix, Subspace, Vector};

/// Prelude module for convenient imports.
///
/// ```
/// use liealg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{LieAlgebraWithBasis, StructureCoefficients, Subalgebra};
    pub use crate::algebras::{AbelianLieAlgebra, AbelianRegistry, StructureConstantsAlgebra};
    pub use crate::error::{LieError, Result};
    pub use crate::field::{rational, Field, Gf, Gf2, Gf3, Gf5, Gf7, Rational};
    pub use crate::linalg::{Matrix, Subspace, Vector};
    pub use crate::uea::{GAlgebra, NcPolynomial};
}

//! The abelian Lie algebra on a free module.

use core::fmt;

use super::{check_unique, parse_names};
use crate::algebra::{LieAlgebraWithBasis, LieCache};
use crate::error::{LieError, Result};
use crate::field::Field;
use crate::linalg::{Matrix, Subspace, Vector};

/// The Lie algebra with zero bracket on a module `M ⊆ F^d`.
///
/// Elements are coordinate vectors over the echelonized basis of `M`;
/// [`to_module_vector`](Self::to_module_vector) and
/// [`from_module_vector`](Self::from_module_vector) convert to and from
/// the ambient `F^d`.
///
/// # Example
///
/// ```
/// use liealg::algebras::AbelianLieAlgebra;
/// use liealg::field::{Field, Rational};
/// use liealg::LieAlgebraWithBasis;
///
/// let l = AbelianLieAlgebra::<Rational>::new("a,b,c").unwrap();
/// assert!(l.is_abelian());
/// assert!(l.killing_form_matrix().is_zero());
///
/// let (a, b, c) = (l.generator("a").unwrap(), l.generator("b").unwrap(), l.generator("c").unwrap());
/// let two = Rational::from_i64(2);
/// let s = l.named_subalgebra(&[&(&a.scale(&two) + &b), &(&b + &c)], "x,y").unwrap();
/// assert_eq!(s.dimension(), 2);
/// assert_eq!(s.basis_matrix().to_string(), "[1 0 -1/2]\n[0 1    1]");
/// ```
#[derive(Clone)]
pub struct AbelianLieAlgebra<F> {
    names: Vec<String>,
    module: Subspace<F>,
    cache: LieCache<F>,
}

impl<F: Field> AbelianLieAlgebra<F> {
    /// The abelian algebra on `F^n`, one basis element per comma-separated name.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DuplicateGenerator`] if a name repeats.
    pub fn new(names: &str) -> Result<Self> {
        let names = parse_names(names)?;
        let module = Subspace::full(names.len());
        Self::with_module(names, module)
    }

    /// The abelian algebra on the given module, one name per basis vector.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the number of names differs
    /// from the module's dimension, and [`LieError::DuplicateGenerator`] if a
    /// name repeats.
    pub fn with_module(names: Vec<String>, module: Subspace<F>) -> Result<Self> {
        if names.len() != module.dimension() {
            return Err(LieError::DimensionMismatch {
                expected: module.dimension(),
                found: names.len(),
            });
        }
        Ok(Self {
            names: check_unique(names)?,
            module,
            cache: LieCache::new(),
        })
    }

    /// The underlying module inside `F^d`.
    #[inline]
    pub fn module(&self) -> &Subspace<F> {
        &self.module
    }

    /// Image of `x` in the ambient `F^d`.
    ///
    /// # Panics
    ///
    /// Panics if `x` has the wrong length.
    pub fn to_module_vector(&self, x: &Vector<F>) -> Vector<F> {
        assert_eq!(x.len(), self.dimension(), "element length mismatch");
        self.module.combine(x.entries())
    }

    /// The element whose image in `F^d` is `v`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NotInSubspace`] if `v` is outside the module.
    pub fn from_module_vector(&self, v: &Vector<F>) -> Result<Vector<F>> {
        self.module.coordinates(v).ok_or(LieError::NotInSubspace)
    }

    /// The abelian algebra on the span of `gens`, named by `names`.
    ///
    /// A single name with several generators is expanded to `name0, name1, …`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if a generator has the wrong
    /// length or the names do not match the span's dimension.
    pub fn named_subalgebra(&self, gens: &[&Vector<F>], names: &str) -> Result<Self> {
        let mut names = parse_names(names)?;
        if names.len() == 1 && gens.len() != 1 {
            names = (0..gens.len()).map(|i| format!("{}{i}", names[0])).collect();
        }
        let mut images = Vec::with_capacity(gens.len());
        for g in gens {
            if g.len() != self.dimension() {
                return Err(LieError::DimensionMismatch {
                    expected: self.dimension(),
                    found: g.len(),
                });
            }
            images.push(self.to_module_vector(g));
        }
        let module = Subspace::span(self.module.degree(), images)?;
        Self::with_module(names, module)
    }
}

impl<F: Field> LieAlgebraWithBasis for AbelianLieAlgebra<F> {
    type Scalar = F;

    fn ordered_indices(&self) -> &[String] {
        &self.names
    }

    fn bracket_on_basis(&self, _i: usize, _j: usize) -> Vector<F> {
        self.zero()
    }

    fn cache(&self) -> &LieCache<F> {
        &self.cache
    }

    fn basis_matrix(&self) -> Matrix<F> {
        self.module.basis_matrix().clone()
    }

    fn bracket(&self, x: &Vector<F>, y: &Vector<F>) -> Vector<F> {
        assert_eq!(x.len(), self.dimension(), "element length mismatch");
        assert_eq!(y.len(), self.dimension(), "element length mismatch");
        self.zero()
    }
}

impl<F: Field> PartialEq for AbelianLieAlgebra<F> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.module == other.module
    }
}

impl<F: Field> Eq for AbelianLieAlgebra<F> {}

impl<F: Field> fmt::Debug for AbelianLieAlgebra<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbelianLieAlgebra")
            .field("names", &self.names)
            .field("module", &self.module)
            .finish()
    }
}

impl<F: Field> fmt::Display for AbelianLieAlgebra<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.names.iter().map(|n| format!("'{n}'")).collect();
        write!(
            f,
            "Abelian Lie algebra with generators ({}) over {}",
            names.join(", "),
            F::name()
        )?;
        let basis = self.module.basis_matrix();
        if !basis.is_one() {
            write!(f, " with basis matrix:\n{basis}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Gf2, Rational};

    type Q = Rational;

    #[test]
    fn brackets_vanish() {
        let l = AbelianLieAlgebra::<Q>::new("x,y,z").unwrap();
        for a in l.basis() {
            for b in l.basis() {
                assert!(l.bracket(&a, &b).is_zero());
            }
        }
        assert!(l.structure_coefficients().is_empty());
        assert!(l.is_nilpotent());
        assert!(l.center().is_full());
    }

    #[test]
    fn names_must_match_module_dimension() {
        let m = Subspace::<Q>::full(3);
        let err = AbelianLieAlgebra::with_module(vec!["x".into(), "y".into()], m);
        assert_eq!(
            err.unwrap_err(),
            LieError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn subalgebra_names_expand() {
        let l = AbelianLieAlgebra::<Q>::new("a,b,c").unwrap();
        let a = l.generator("a").unwrap();
        let c = l.generator("c").unwrap();
        let s = l.named_subalgebra(&[&a, &c], "x").unwrap();
        assert_eq!(s.ordered_indices(), ["x0", "x1"]);
        assert_eq!(
            s.to_string(),
            "Abelian Lie algebra with generators ('x0', 'x1') over Rational Field \
             with basis matrix:\n[1 0 0]\n[0 0 1]"
        );
    }

    #[test]
    fn dependent_generators_fail_the_name_count() {
        let l = AbelianLieAlgebra::<Q>::new("a,b").unwrap();
        let a = l.generator("a").unwrap();
        let err = l.named_subalgebra(&[&a, &a.scale(&Q::from_i64(2))], "x,y");
        assert_eq!(
            err.unwrap_err(),
            LieError::DimensionMismatch {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn module_vector_round_trip() {
        let l = AbelianLieAlgebra::<Q>::new("a,b,c").unwrap();
        let v = Vector::from_i64(&[1, 1, 0]);
        let w = Vector::from_i64(&[0, 1, 1]);
        let s = l.named_subalgebra(&[&v, &w], "x,y").unwrap();
        let x = s.from_module_vector(&Vector::from_i64(&[1, 2, 1])).unwrap();
        assert_eq!(s.to_module_vector(&x), Vector::from_i64(&[1, 2, 1]));
        assert_eq!(
            s.from_module_vector(&Vector::from_i64(&[1, 0, 0])),
            Err(LieError::NotInSubspace)
        );
    }

    #[test]
    fn display_of_full_module() {
        let l = AbelianLieAlgebra::<Gf2>::new("a,b").unwrap();
        assert_eq!(
            l.to_string(),
            "Abelian Lie algebra with generators ('a', 'b') over Finite Field of size 2"
        );
    }
}

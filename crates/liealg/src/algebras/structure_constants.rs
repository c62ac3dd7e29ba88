//! Lie algebras defined by a bracket table on named generators.

use core::fmt;
use std::collections::BTreeMap;

use super::parse_names;
use crate::algebra::{LieAlgebraWithBasis, LieCache};
use crate::error::{LieError, Result};
use crate::field::Field;
use crate::linalg::Vector;

/// A Lie algebra given by its brackets `[b_i, b_j]` for `i < j`.
///
/// Built through [`StructureConstantsAlgebra::builder`], which validates
/// names and orientation but not the Jacobi identity; call
/// [`verify_jacobi`](Self::verify_jacobi) for that.
///
/// # Example
///
/// ```
/// use liealg::algebras::StructureConstantsAlgebra;
/// use liealg::field::Rational;
/// use liealg::LieAlgebraWithBasis;
///
/// let l = StructureConstantsAlgebra::<Rational>::builder("x,y")
///     .bracket_i64("y", "x", &[("x", -1)])
///     .build()
///     .unwrap();
/// assert_eq!(l, StructureConstantsAlgebra::two_dimensional_nonabelian());
/// assert!(l.verify_jacobi().is_ok());
/// assert_eq!(l.to_string(), "Lie algebra on 2 generators (x, y) over Rational Field");
/// ```
#[derive(Clone)]
pub struct StructureConstantsAlgebra<F> {
    names: Vec<String>,
    table: BTreeMap<(usize, usize), Vector<F>>,
    cache: LieCache<F>,
}

impl<F: Field> StructureConstantsAlgebra<F> {
    /// Starts a bracket table on the comma-separated generator `names`.
    pub fn builder(names: &str) -> StructureConstantsBuilder<F> {
        StructureConstantsBuilder {
            names: names.to_string(),
            brackets: Vec::new(),
        }
    }

    pub(crate) fn from_parts(names: Vec<String>, table: BTreeMap<(usize, usize), Vector<F>>) -> Self {
        Self {
            names,
            table,
            cache: LieCache::new(),
        }
    }

    /// Checks `[b_i, [b_j, b_k]] + [b_j, [b_k, b_i]] + [b_k, [b_i, b_j]] = 0`
    /// on every basis triple `i < j < k`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::JacobiViolation`] for the first failing triple.
    pub fn verify_jacobi(&self) -> Result<()> {
        let n = self.dimension();
        let basis = self.basis();
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    let (a, b, c) = (&basis[i], &basis[j], &basis[k]);
                    let mut sum = self.bracket(a, &self.bracket(b, c));
                    sum = &sum + &self.bracket(b, &self.bracket(c, a));
                    sum = &sum + &self.bracket(c, &self.bracket(a, b));
                    if !sum.is_zero() {
                        return Err(LieError::JacobiViolation { i, j, k });
                    }
                }
            }
        }
        Ok(())
    }
}

impl<F: Field> LieAlgebraWithBasis for StructureConstantsAlgebra<F> {
    type Scalar = F;

    fn ordered_indices(&self) -> &[String] {
        &self.names
    }

    fn bracket_on_basis(&self, i: usize, j: usize) -> Vector<F> {
        if i < j {
            self.table.get(&(i, j)).cloned().unwrap_or_else(|| self.zero())
        } else if i > j {
            self.table.get(&(j, i)).map_or_else(|| self.zero(), |v| -v)
        } else {
            self.zero()
        }
    }

    fn cache(&self) -> &LieCache<F> {
        &self.cache
    }
}

impl<F: Field> PartialEq for StructureConstantsAlgebra<F> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.table == other.table
    }
}

impl<F: Field> Eq for StructureConstantsAlgebra<F> {}

impl<F: Field> fmt::Debug for StructureConstantsAlgebra<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureConstantsAlgebra")
            .field("names", &self.names)
            .field("brackets", &self.table.len())
            .finish()
    }
}

impl<F: Field> fmt::Display for StructureConstantsAlgebra<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lie algebra on {} generators ({}) over {}",
            self.names.len(),
            self.names.join(", "),
            F::name()
        )
    }
}

/// One `[left, right] = Σ c·name` entry awaiting validation.
#[derive(Clone, Debug)]
struct BracketEntry<F> {
    left: String,
    right: String,
    terms: Vec<(String, F)>,
}

/// Collects brackets by generator name; [`build`](Self::build) validates them.
#[derive(Clone, Debug)]
pub struct StructureConstantsBuilder<F> {
    names: String,
    brackets: Vec<BracketEntry<F>>,
}

impl<F: Field> StructureConstantsBuilder<F> {
    /// Declares `[left, right] = Σ c·name`. Pairs never declared bracket to zero.
    #[must_use]
    pub fn bracket<S, I>(mut self, left: &str, right: &str, terms: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, F)>,
    {
        self.brackets.push(BracketEntry {
            left: left.trim().to_string(),
            right: right.trim().to_string(),
            terms: terms.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        });
        self
    }

    /// [`bracket`](Self::bracket) with integer coefficients.
    #[must_use]
    pub fn bracket_i64(self, left: &str, right: &str, terms: &[(&str, i64)]) -> Self {
        let terms: Vec<_> = terms.iter().map(|&(n, c)| (n, F::from_i64(c))).collect();
        self.bracket(left, right, terms)
    }

    /// Resolves names and orients every bracket as `(i, j)` with `i < j`.
    ///
    /// # Errors
    ///
    /// - [`LieError::DuplicateGenerator`] if a generator name repeats.
    /// - [`LieError::UnknownGenerator`] if a bracket mentions an undeclared name.
    /// - [`LieError::NonZeroSelfBracket`] if `[x, x]` is given a non-zero value.
    /// - [`LieError::InconsistentBracket`] if a pair is given two values that
    ///   are not related by alternation.
    pub fn build(self) -> Result<StructureConstantsAlgebra<F>> {
        let names = parse_names(&self.names)?;
        let n = names.len();
        let index = |name: &str| {
            names
                .iter()
                .position(|g| g == name)
                .ok_or_else(|| LieError::UnknownGenerator(name.to_string()))
        };

        let mut table: BTreeMap<(usize, usize), Vector<F>> = BTreeMap::new();
        for entry in &self.brackets {
            let i = index(&entry.left)?;
            let j = index(&entry.right)?;
            let mut value = Vector::zero(n);
            for (name, c) in &entry.terms {
                let k = index(name.trim())?;
                value.add_scaled(c, &Vector::unit(n, k));
            }
            if i == j {
                if value.is_zero() {
                    continue;
                }
                return Err(LieError::NonZeroSelfBracket(entry.left.clone()));
            }
            let (key, value) = if i < j { ((i, j), value) } else { ((j, i), -&value) };
            match table.get(&key) {
                Some(existing) if *existing != value => {
                    return Err(LieError::InconsistentBracket {
                        left: entry.left.clone(),
                        right: entry.right.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    table.insert(key, value);
                }
            }
        }
        table.retain(|_, v| !v.is_zero());
        Ok(StructureConstantsAlgebra::from_parts(names, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{rational, Rational};

    type Q = Rational;

    #[test]
    fn reversed_pairs_are_negated() {
        let l = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "y", &[("x", 1)])
            .build()
            .unwrap();
        let x = l.generator("x").unwrap();
        let y = l.generator("y").unwrap();
        assert_eq!(l.bracket(&x, &y), x);
        assert_eq!(l.bracket(&y, &x), -&x);
        assert!(l.bracket(&x, &x).is_zero());
    }

    #[test]
    fn both_orientations_must_agree() {
        let ok = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "y", &[("x", 1)])
            .bracket_i64("y", "x", &[("x", -1)])
            .build();
        assert!(ok.is_ok());
        let bad = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "y", &[("x", 1)])
            .bracket_i64("y", "x", &[("x", 1)])
            .build();
        assert_eq!(
            bad.unwrap_err(),
            LieError::InconsistentBracket {
                left: "y".into(),
                right: "x".into()
            }
        );
    }

    #[test]
    fn validation_errors() {
        let unknown = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "w", &[("x", 1)])
            .build();
        assert_eq!(unknown.unwrap_err(), LieError::UnknownGenerator("w".into()));
        let unknown_term = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "y", &[("q", 1)])
            .build();
        assert_eq!(unknown_term.unwrap_err(), LieError::UnknownGenerator("q".into()));
        let selfb = StructureConstantsAlgebra::<Q>::builder("x,y")
            .bracket_i64("x", "x", &[("y", 1)])
            .build();
        assert_eq!(selfb.unwrap_err(), LieError::NonZeroSelfBracket("x".into()));
        let dup = StructureConstantsAlgebra::<Q>::builder("x,y,x").build();
        assert_eq!(dup.unwrap_err(), LieError::DuplicateGenerator("x".into()));
    }

    #[test]
    fn repeated_terms_accumulate_and_cancel() {
        let l = StructureConstantsAlgebra::<Q>::builder("x,y,z")
            .bracket("x", "y", [("z", rational(1, 2)), ("z", rational(1, 2))])
            .bracket("x", "z", [("y", Q::from_i64(1)), ("y", Q::from_i64(-1))])
            .build()
            .unwrap();
        assert_eq!(l.structure_coefficients().len(), 1);
        assert_eq!(
            l.bracket_on_basis(0, 1),
            l.generator("z").unwrap()
        );
        assert!(l.is_nilpotent());
    }

    #[test]
    fn jacobi_failure_is_reported() {
        // [x, y] = z, [y, z] = x, [z, x] = z violates Jacobi:
        // [x,[y,z]] + [y,[z,x]] + [z,[x,y]] = 0 + [y, z] + 0 = x.
        let l = StructureConstantsAlgebra::<Q>::builder("x,y,z")
            .bracket_i64("x", "y", &[("z", 1)])
            .bracket_i64("y", "z", &[("x", 1)])
            .bracket_i64("z", "x", &[("z", 1)])
            .build()
            .unwrap();
        assert_eq!(
            l.verify_jacobi(),
            Err(LieError::JacobiViolation { i: 0, j: 1, k: 2 })
        );
        assert!(StructureConstantsAlgebra::<Q>::so3().verify_jacobi().is_ok());
    }
}

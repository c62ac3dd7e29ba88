//! Free associative algebras and their g-algebra quotients.

use core::fmt;
use std::collections::{BTreeMap, HashSet};

use super::polynomial::{NcPolynomial, Word};
use crate::algebra::write_combination;
use crate::error::{LieError, Result};
use crate::field::Field;
use crate::linalg::Vector;

/// The free associative algebra on named generators.
///
/// # Example
///
/// ```
/// use liealg::field::{Field, Rational};
/// use liealg::uea::{FreeAlgebra, NcPolynomial};
///
/// let free = FreeAlgebra::<Rational>::new(["x", "y"]).unwrap();
/// // y x = x y + 1: the first Weyl algebra.
/// let rhs = &free.word(&[0, 1]) + &NcPolynomial::constant(Rational::from_i64(1));
/// let weyl = free.g_algebra([(vec![1, 0], rhs)]).unwrap();
/// let (x, y) = (weyl.generator("x").unwrap(), weyl.generator("y").unwrap());
/// assert_eq!(weyl.display(&weyl.commutator(&y, &x)), "1");
/// assert_eq!(weyl.display(&weyl.mul(&y, &weyl.mul(&x, &x))), "x^2*y + 2*x");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FreeAlgebra<F> {
    names: Vec<String>,
    _field: core::marker::PhantomData<F>,
}

impl<F: Field> FreeAlgebra<F> {
    /// The free algebra on `names`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DuplicateGenerator`] if a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for n in &names {
            if !seen.insert(n.as_str()) {
                return Err(LieError::DuplicateGenerator(n.clone()));
            }
        }
        Ok(Self {
            names,
            _field: core::marker::PhantomData,
        })
    }

    /// Generator names, in index order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of generators.
    #[inline]
    pub fn ngens(&self) -> usize {
        self.names.len()
    }

    /// The monomial `x_{w_0} x_{w_1} …` with coefficient one.
    pub fn word(&self, word: &[usize]) -> NcPolynomial<F> {
        NcPolynomial::monomial(word.to_vec(), F::one())
    }

    /// Quotient by relations `x_j x_i = c·x_i x_j + d`.
    ///
    /// Each relation is keyed by the descent word `[j, i]` with `j > i`.
    /// Its right-hand side must contain `x_i x_j` with a non-zero coefficient
    /// `c`, and every other term must have degree below two. Pairs without a
    /// relation commute.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::InvalidRelation`] for a malformed or repeated
    /// relation, and [`LieError::UnknownGenerator`] for an index out of range.
    pub fn g_algebra<I>(self, relations: I) -> Result<GAlgebra<F>>
    where
        I: IntoIterator<Item = (Word, NcPolynomial<F>)>,
    {
        let n = self.ngens();
        let mut table = BTreeMap::new();
        for (key, rhs) in relations {
            let (j, i) = match key.as_slice() {
                &[j, i] if j > i => (j, i),
                _ => {
                    return Err(LieError::InvalidRelation(format!(
                        "key {key:?} is not a descent pair x_j x_i with j > i"
                    )))
                }
            };
            if j >= n {
                return Err(LieError::UnknownGenerator(format!("index {j}")));
            }
            if let Some(g) = rhs.max_generator().filter(|&g| g >= n) {
                return Err(LieError::UnknownGenerator(format!("index {g}")));
            }
            let mut rest = BTreeMap::new();
            let mut swap = F::zero();
            for (w, c) in rhs.into_terms() {
                if w[..] == [i, j] {
                    swap = c;
                } else if w.len() >= 2 {
                    return Err(LieError::InvalidRelation(format!(
                        "relation for {key:?} has a term {w:?} of degree {}",
                        w.len()
                    )));
                } else {
                    rest.insert(w, c);
                }
            }
            if swap.is_zero() {
                return Err(LieError::InvalidRelation(format!(
                    "relation for {key:?} lacks the term x_{i} x_{j}"
                )));
            }
            let relation = Relation {
                swap,
                rest: NcPolynomial::from_terms(rest),
            };
            if table.insert((j, i), relation).is_some() {
                return Err(LieError::InvalidRelation(format!(
                    "relation for {key:?} given twice"
                )));
            }
        }
        Ok(GAlgebra {
            names: self.names,
            relations: table,
        })
    }
}

/// `x_j x_i = swap · x_i x_j + rest` for `j > i`.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Relation<F> {
    swap: F,
    rest: NcPolynomial<F>,
}

/// A g-algebra: the free algebra modulo PBW-type commutation relations.
///
/// Elements are kept in normal form, a combination of words whose
/// generator indices never decrease.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GAlgebra<F> {
    names: Vec<String>,
    relations: BTreeMap<(usize, usize), Relation<F>>,
}

impl<F: Field> GAlgebra<F> {
    /// Builds the algebra from relations already known to be well formed.
    pub(crate) fn from_commutators(
        names: Vec<String>,
        commutators: impl IntoIterator<Item = ((usize, usize), NcPolynomial<F>)>,
    ) -> Self {
        let relations = commutators
            .into_iter()
            .map(|(key, rest)| {
                (
                    key,
                    Relation {
                        swap: F::one(),
                        rest,
                    },
                )
            })
            .collect();
        Self { names, relations }
    }

    /// Generator names, in index order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of generators.
    #[inline]
    pub fn ngens(&self) -> usize {
        self.names.len()
    }

    /// Number of non-commuting generator pairs.
    #[inline]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// True if every pair of generators commutes.
    #[inline]
    pub fn is_commutative(&self) -> bool {
        self.relations
            .values()
            .all(|r| r.swap.is_one() && r.rest.is_zero())
    }

    /// The relations as `(x_j x_i, right-hand side)` pairs, `j > i`.
    pub fn relations(&self) -> impl Iterator<Item = (Word, NcPolynomial<F>)> + '_ {
        self.relations.iter().map(|(&(j, i), r)| {
            let mut rhs = r.rest.clone();
            rhs.add_term(vec![i, j], r.swap.clone());
            (vec![j, i], rhs)
        })
    }

    /// The generator named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::UnknownGenerator`] if no generator has that name.
    pub fn generator(&self, name: &str) -> Result<NcPolynomial<F>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| NcPolynomial::monomial(vec![i], F::one()))
            .ok_or_else(|| LieError::UnknownGenerator(name.to_string()))
    }

    /// All generators, in index order.
    pub fn gens(&self) -> Vec<NcPolynomial<F>> {
        (0..self.ngens())
            .map(|i| NcPolynomial::monomial(vec![i], F::one()))
            .collect()
    }

    /// The unit.
    pub fn one(&self) -> NcPolynomial<F> {
        NcPolynomial::constant(F::one())
    }

    /// `Σ vᵢ xᵢ`.
    ///
    /// # Panics
    ///
    /// Panics if `v` is longer than the number of generators.
    pub fn linear(&self, v: &Vector<F>) -> NcPolynomial<F> {
        assert!(v.len() <= self.ngens(), "element length mismatch");
        NcPolynomial::from_terms(v.iter_nonzero().map(|(i, c)| (vec![i], c.clone())))
    }

    /// Normal form: rewrite the leftmost descent of every word until none remain.
    pub fn normal_form(&self, p: &NcPolynomial<F>) -> NcPolynomial<F> {
        let mut pending = p.clone().into_terms();
        let mut done = NcPolynomial::zero();
        while let Some((word, c)) = pending.pop_last() {
            let Some(pos) = word.windows(2).position(|w| w[0] > w[1]) else {
                done.add_term(word, c);
                continue;
            };
            let (j, i) = (word[pos], word[pos + 1]);
            let (prefix, suffix) = (&word[..pos], &word[pos + 2..]);
            let splice = |middle: &[usize]| -> Word {
                prefix
                    .iter()
                    .chain(middle)
                    .chain(suffix)
                    .copied()
                    .collect()
            };
            let (swap, rest) = match self.relations.get(&(j, i)) {
                Some(r) => (r.swap.clone(), Some(&r.rest)),
                None => (F::one(), None),
            };
            accumulate(&mut pending, splice(&[i, j][..]), c.clone() * swap);
            for (w, d) in rest.into_iter().flat_map(NcPolynomial::terms) {
                accumulate(&mut pending, splice(w.as_slice()), c.clone() * d.clone());
            }
        }
        done
    }

    /// `a · b`, in normal form.
    pub fn mul(&self, a: &NcPolynomial<F>, b: &NcPolynomial<F>) -> NcPolynomial<F> {
        let mut product = NcPolynomial::zero();
        for (u, c) in a.terms() {
            for (v, d) in b.terms() {
                let mut w = u.clone();
                w.extend_from_slice(v);
                product.add_term(w, c.clone() * d.clone());
            }
        }
        self.normal_form(&product)
    }

    /// `ab − ba`.
    pub fn commutator(&self, a: &NcPolynomial<F>, b: &NcPolynomial<F>) -> NcPolynomial<F> {
        &self.mul(a, b) - &self.mul(b, a)
    }

    /// `a + b`.
    pub fn add(&self, a: &NcPolynomial<F>, b: &NcPolynomial<F>) -> NcPolynomial<F> {
        a + b
    }

    /// `a − b`.
    pub fn sub(&self, a: &NcPolynomial<F>, b: &NcPolynomial<F>) -> NcPolynomial<F> {
        a - b
    }

    /// `c · a`.
    pub fn scale(&self, a: &NcPolynomial<F>, c: &F) -> NcPolynomial<F> {
        a.scale(c)
    }

    /// Renders `p` with generator names, highest degree first, runs of one
    /// generator as powers: `x^2*y - 3*z + 1`.
    pub fn display(&self, p: &NcPolynomial<F>) -> String {
        let mut terms: Vec<_> = p.terms().collect();
        terms.sort_by(|(u, _), (v, _)| v.len().cmp(&u.len()).then_with(|| u.cmp(v)));
        let rendered: Vec<(&F, String)> = terms
            .into_iter()
            .map(|(w, c)| (c, self.monomial_name(w)))
            .collect();
        write_combination(rendered.iter().map(|(c, m)| (*c, m.as_str())))
    }

    fn monomial_name(&self, word: &[usize]) -> String {
        let mut parts = Vec::new();
        let mut k = 0;
        while k < word.len() {
            let g = word[k];
            let run = word[k..].iter().take_while(|&&h| h == g).count();
            let name = self.names.get(g).map_or("?", String::as_str);
            if run == 1 {
                parts.push(name.to_string());
            } else {
                parts.push(format!("{name}^{run}"));
            }
            k += run;
        }
        parts.join("*")
    }
}

fn accumulate<F: Field>(pending: &mut BTreeMap<Word, F>, word: Word, c: F) {
    if c.is_zero() {
        return;
    }
    match pending.get_mut(&word) {
        Some(existing) => {
            let sum = existing.clone() + c;
            if sum.is_zero() {
                pending.remove(&word);
            } else {
                *existing = sum;
            }
        }
        None => {
            pending.insert(word, c);
        }
    }
}

impl<F: Field> fmt::Display for GAlgebra<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Noncommutative Multivariate Polynomial Ring in {} over {}, nc-relations: {{",
            self.names.join(", "),
            F::name()
        )?;
        for (k, (lhs, rhs)) in self.relations().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", self.monomial_name(&lhs), self.display(&rhs))?;
        }
        write!(f, "}}")
    }
}

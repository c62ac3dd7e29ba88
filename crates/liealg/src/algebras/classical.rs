//! Small named algebras used throughout the tests and benchmarks.

use std::collections::BTreeMap;

use super::StructureConstantsAlgebra;
use crate::field::Field;
use crate::linalg::Vector;

fn term<F: Field>(n: usize, k: usize, c: i64) -> Vector<F> {
    Vector::unit(n, k).scale(&F::from_i64(c))
}

fn named(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

impl<F: Field> StructureConstantsAlgebra<F> {
    /// `sl(2)` in the basis `(e, h, f)`: `[e, f] = h`, `[h, e] = 2e`, `[h, f] = −2f`.
    #[must_use]
    pub fn sl2() -> Self {
        let table = BTreeMap::from([
            ((0, 1), term(3, 0, -2)),
            ((0, 2), term(3, 1, 1)),
            ((1, 2), term(3, 2, -2)),
        ]);
        Self::from_parts(named(&["e", "h", "f"]), table)
    }

    /// `so(3)`: `[x, y] = z`, `[y, z] = x`, `[z, x] = y`.
    #[must_use]
    pub fn so3() -> Self {
        let table = BTreeMap::from([
            ((0, 1), term(3, 2, 1)),
            ((0, 2), term(3, 1, -1)),
            ((1, 2), term(3, 0, 1)),
        ]);
        Self::from_parts(named(&["x", "y", "z"]), table)
    }

    /// The Heisenberg algebra of rank `n` on `p1…pn, q1…qn, z` with
    /// `[p_i, q_i] = z` and every other bracket zero.
    #[must_use]
    pub fn heisenberg(n: usize) -> Self {
        let dim = 2 * n + 1;
        let mut names: Vec<String> = (1..=n).map(|i| format!("p{i}")).collect();
        names.extend((1..=n).map(|i| format!("q{i}")));
        names.push("z".to_string());
        let table = (0..n).map(|i| ((i, n + i), term(dim, 2 * n, 1))).collect();
        Self::from_parts(names, table)
    }

    /// The non-abelian two-dimensional algebra: `[x, y] = x`.
    #[must_use]
    pub fn two_dimensional_nonabelian() -> Self {
        let table = BTreeMap::from([((0, 1), term(2, 0, 1))]);
        Self::from_parts(named(&["x", "y"]), table)
    }
}

//! Algebras whose basis order differs from index order.

use core::cmp::Ordering;

use liealg::prelude::*;
use liealg::LieCache;

type Q = Rational;

/// sl2 on (e, h, f) with the basis compared in reverse: f < h < e.
struct ReversedSl2 {
    inner: StructureConstantsAlgebra<Q>,
    cache: LieCache<Q>,
}

impl ReversedSl2 {
    fn new() -> Self {
        Self {
            inner: StructureConstantsAlgebra::sl2(),
            cache: LieCache::new(),
        }
    }
}

impl LieAlgebraWithBasis for ReversedSl2 {
    type Scalar = Q;

    fn ordered_indices(&self) -> &[String] {
        self.inner.ordered_indices()
    }

    fn bracket_on_basis(&self, i: usize, j: usize) -> Vector<Q> {
        self.inner.bracket_on_basis(i, j)
    }

    fn cache(&self) -> &LieCache<Q> {
        &self.cache
    }

    fn basis_cmp(&self, i: usize, j: usize) -> Ordering {
        j.cmp(&i)
    }
}

#[test]
fn keys_follow_the_reversed_order() {
    let l = ReversedSl2::new();
    let s = l.structure_coefficients();
    assert_eq!(s.keys().collect::<Vec<_>>(), vec![(1, 0), (2, 0), (2, 1)]);
    // [h, e] = 2e, [f, e] = -h, [f, h] = 2f
    assert_eq!(s.get(1, 0), Some(&Vector::from_i64(&[2, 0, 0])));
    assert_eq!(s.get(2, 0), Some(&Vector::from_i64(&[0, -1, 0])));
    assert_eq!(s.get(2, 1), Some(&Vector::from_i64(&[0, 0, 2])));
    assert_eq!(s.get(0, 1), None);
}

#[test]
fn brackets_agree_with_index_order() {
    let l = ReversedSl2::new();
    let sl2 = StructureConstantsAlgebra::<Q>::sl2();
    for x in l.basis() {
        for y in l.basis() {
            assert_eq!(l.bracket(&x, &y), sl2.bracket(&x, &y));
            assert_eq!(l.structure_coefficients().bracket(&x, &y), sl2.bracket(&x, &y));
        }
    }
}

#[test]
fn enveloping_commutators_match_brackets() {
    let l = ReversedSl2::new();
    let u = l.construct_uea();
    assert_eq!(u.relation_count(), 3);
    for x in l.basis() {
        for y in l.basis() {
            let lhs = u.commutator(&l.lift(&x), &l.lift(&y));
            assert_eq!(lhs, l.lift(&l.bracket(&x, &y)));
        }
    }
}

#[test]
fn invariants_do_not_depend_on_the_order() {
    let l = ReversedSl2::new();
    let sl2 = StructureConstantsAlgebra::<Q>::sl2();
    assert!(l.is_semisimple());
    assert_eq!(l.center().dimension(), 0);
    assert_eq!(l.center().dimension(), sl2.center().dimension());
    assert_eq!(l.killing_form_matrix(), sl2.killing_form_matrix());
    assert_eq!(l.derived_subalgebra().dimension(), 3);
}

//! Universal enveloping algebras built from structure coefficients.

use liealg::prelude::*;
use liealg::uea::FreeAlgebra;

type Q = Rational;

#[test]
fn sl2_relations_in_pbw_order() {
    let l = StructureConstantsAlgebra::<Q>::sl2();
    let u = l.construct_uea();
    assert_eq!(u.names(), ["e", "h", "f"]);
    assert_eq!(u.relation_count(), 3);
    let rendered: Vec<String> = u
        .relations()
        .map(|(word, rhs)| format!("{:?} -> {}", word, u.display(&rhs)))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "[1, 0] -> e*h + 2*e",
            "[2, 0] -> e*f - h",
            "[2, 1] -> h*f + 2*f",
        ]
    );
}

#[test]
fn commutators_of_lifts_are_lifts_of_brackets() {
    let l = StructureConstantsAlgebra::<Q>::heisenberg(2);
    let u = l.construct_uea();
    for a in l.basis() {
        for b in l.basis() {
            let lhs = u.commutator(&l.lift(&a), &l.lift(&b));
            assert_eq!(lhs, l.lift(&l.bracket(&a, &b)));
        }
    }
}

#[test]
fn casimir_of_sl2_is_central() {
    // C = e*f + f*e + h^2/2
    let l = StructureConstantsAlgebra::<Q>::sl2();
    let u = l.construct_uea();
    let e = u.generator("e").unwrap();
    let h = u.generator("h").unwrap();
    let f = u.generator("f").unwrap();
    let ef = u.mul(&e, &f);
    let fe = u.mul(&f, &e);
    let hh = u.scale(&u.mul(&h, &h), &rational(1, 2));
    let casimir = u.add(&u.add(&ef, &fe), &hh);
    for g in u.gens() {
        assert!(u.commutator(&casimir, &g).is_zero());
    }
    assert_eq!(u.display(&casimir), "2*e*f + 1/2*h^2 - h");
}

#[test]
fn normal_forms_are_idempotent() {
    let l = StructureConstantsAlgebra::<Q>::so3();
    let u = l.construct_uea();
    let x = u.generator("x").unwrap();
    let z = u.generator("z").unwrap();
    let zx = u.mul(&z, &x);
    assert_eq!(u.normal_form(&zx), zx);
    assert_eq!(zx.degree(), Some(2));
}

#[test]
fn abelian_uea_is_a_polynomial_ring() {
    let l = AbelianLieAlgebra::<Gf3>::new("a,b").unwrap();
    let u = l.construct_uea();
    assert!(u.is_commutative());
    let a = u.generator("a").unwrap();
    let b = u.generator("b").unwrap();
    assert_eq!(u.mul(&b, &a), u.mul(&a, &b));
    // (a + b)^3 = a^3 + b^3 in characteristic 3.
    let s = u.add(&a, &b);
    let cube = u.mul(&u.mul(&s, &s), &s);
    assert_eq!(u.display(&cube), "a^3 + b^3");
}

#[test]
fn free_algebra_rejects_non_pbw_relations() {
    let free = FreeAlgebra::<Q>::new(["x", "y"]).unwrap();
    let rhs = free.word(&[0, 1]);
    let bad_order = free.clone().g_algebra([(vec![0, 1], rhs.clone())]);
    assert!(matches!(bad_order, Err(LieError::InvalidRelation(_))));
    let ok = free.g_algebra([(vec![1, 0], rhs)]).unwrap();
    assert!(ok.is_commutative());
}

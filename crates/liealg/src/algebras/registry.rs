//! Shared instances of [`AbelianLieAlgebra`].
//!
//! Structurally identical algebras (same names, same module) resolve to one
//! reference-counted instance, so their caches are shared too.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use liealg::algebras::AbelianRegistry;
//! use liealg::field::Rational;
//! use liealg::linalg::Subspace;
//!
//! let registry = AbelianRegistry::<Rational>::new();
//! let a = registry.get("x,y,z", None).unwrap();
//! let b = registry.get(" x, y, z", Some(Subspace::full(3))).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(registry.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use super::{parse_names, AbelianLieAlgebra};
use crate::error::{LieError, Result};
use crate::field::Field;
use crate::linalg::Subspace;

type Key<F> = (Vec<String>, Subspace<F>);

/// Factory keyed by the normalized constructor arguments.
pub struct AbelianRegistry<F: Field> {
    entries: Mutex<HashMap<Key<F>, Arc<AbelianLieAlgebra<F>>>>,
}

impl<F: Field> AbelianRegistry<F> {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Key<F>, Arc<AbelianLieAlgebra<F>>>> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// The algebra named by `names` on `module` (default: the full `F^n`).
    ///
    /// # Errors
    ///
    /// Returns [`LieError::DimensionMismatch`] if the number of names differs
    /// from the module's dimension, and [`LieError::DuplicateGenerator`] if a
    /// name repeats.
    pub fn get(
        &self,
        names: &str,
        module: Option<Subspace<F>>,
    ) -> Result<Arc<AbelianLieAlgebra<F>>> {
        let names = parse_names(names)?;
        let module = module.unwrap_or_else(|| Subspace::full(names.len()));
        if names.len() != module.dimension() {
            return Err(LieError::DimensionMismatch {
                expected: module.dimension(),
                found: names.len(),
            });
        }
        let key = (names, module);
        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            return Ok(Arc::clone(existing));
        }
        let algebra = Arc::new(AbelianLieAlgebra::with_module(key.0.clone(), key.1.clone())?);
        debug!(generators = ?key.0, "registered abelian Lie algebra");
        entries.insert(key, Arc::clone(&algebra));
        Ok(algebra)
    }

    /// Number of distinct algebras handed out so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<F: Field> Default for AbelianRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Gf5, Rational};
    use crate::linalg::Vector;
    use crate::LieAlgebraWithBasis;

    type Q = Rational;

    #[test]
    fn distinct_arguments_give_distinct_instances() {
        let registry = AbelianRegistry::<Q>::new();
        let xyz = registry.get("x,y,z", None).unwrap();
        let abc = registry.get("a,b,c", None).unwrap();
        assert!(!Arc::ptr_eq(&xyz, &abc));
        let plane = Subspace::span(3, [Vector::from_i64(&[1, 0, 0]), Vector::from_i64(&[0, 1, 1])])
            .unwrap();
        let xy = registry.get("x,y", Some(plane.clone())).unwrap();
        assert_eq!(xy.dimension(), 2);
        assert!(Arc::ptr_eq(&xy, &registry.get("x,y", Some(plane)).unwrap()));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn caches_are_shared_between_handles() {
        let registry = AbelianRegistry::<Gf5>::new();
        let a = registry.get("p,q", None).unwrap();
        let _ = a.structure_coefficients();
        let b = registry.get("p,q", None).unwrap();
        assert!(format!("{:?}", b.cache()).contains("structure: true"));
    }

    #[test]
    fn mismatched_names_are_rejected() {
        let registry = AbelianRegistry::<Q>::new();
        let err = registry.get("x,y", Some(Subspace::full(3))).unwrap_err();
        assert_eq!(
            err,
            LieError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_is_usable_across_threads() {
        let registry = Arc::new(AbelianRegistry::<Q>::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let r = Arc::clone(&registry);
                std::thread::spawn(move || r.get("u,v", None).unwrap())
            })
            .collect();
        let algebras: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for a in &algebras[1..] {
            assert!(Arc::ptr_eq(&algebras[0], a));
        }
    }
}

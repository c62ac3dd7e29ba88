//! Concrete Lie algebras.
//!
//! - [`AbelianLieAlgebra`]: the zero bracket on a free module, optionally a
//!   subspace of a larger one. [`AbelianRegistry`] hands out one shared
//!   instance per normalized set of constructor arguments.
//! - [`StructureConstantsAlgebra`]: any algebra given by a bracket table
//!   on named generators, with the classical examples `sl2`, `so3`, the
//!   Heisenberg algebras, and the two-dimensional non-abelian algebra.

mod abelian;
mod classical;
mod registry;
mod structure_constants;

pub use abelian::AbelianLieAlgebra;
pub use registry::AbelianRegistry;
pub use structure_constants::{StructureConstantsAlgebra, StructureConstantsBuilder};

use std::collections::HashSet;

use crate::error::{LieError, Result};

/// Splits `"x, y,z"` into trimmed names. The empty string gives no names.
///
/// # Errors
///
/// Returns [`LieError::DuplicateGenerator`] if a name repeats.
pub fn parse_names(names: &str) -> Result<Vec<String>> {
    if names.trim().is_empty() {
        return Ok(Vec::new());
    }
    check_unique(names.split(',').map(|n| n.trim().to_string()).collect())
}

pub(crate) fn check_unique(names: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    for n in &names {
        if !seen.insert(n.as_str()) {
            return Err(LieError::DuplicateGenerator(n.clone()));
        }
    }
    Ok(names)
}

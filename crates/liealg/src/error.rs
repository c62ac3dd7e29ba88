//! Error type shared by every fallible construction in the crate.
//!
//! Errors are raised where the bad input enters (element construction,
//! generator normalization, bracket-table validation). The generic
//! algorithms themselves are total once their inputs exist.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, LieError>;

/// Errors produced while building algebras, elements, and subspaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LieError {
    /// A vector, module, or name list has the wrong length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Length required by the receiving object.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// A bracket table refers to a name that is not a generator.
    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),

    /// The same generator name appears twice.
    #[error("duplicate generator '{0}'")]
    DuplicateGenerator(String),

    /// Both `[a, b]` and `[b, a]` were supplied and are not negatives of each other.
    #[error("inconsistent bracket: [{left}, {right}] is not the negation of [{right}, {left}]")]
    InconsistentBracket {
        /// First operand name.
        left: String,
        /// Second operand name.
        right: String,
    },

    /// `[x, x]` was given a non-zero value.
    #[error("bracket [{0}, {0}] must be zero")]
    NonZeroSelfBracket(String),

    /// The Jacobi identity fails on a basis triple.
    #[error("Jacobi identity fails on basis triple ({i}, {j}, {k})")]
    JacobiViolation {
        /// First basis index.
        i: usize,
        /// Second basis index.
        j: usize,
        /// Third basis index.
        k: usize,
    },

    /// A vector lies outside the subspace it was expected to belong to.
    #[error("vector is not in the subspace")]
    NotInSubspace,

    /// Two subalgebras do not live inside the same ambient algebra.
    #[error("no common ambient algebra")]
    NoCommonAmbient,

    /// A g-algebra relation is not of the form `x_j x_i = c x_i x_j + (degree < 2)`.
    #[error("invalid relation: {0}")]
    InvalidRelation(String),

    /// A scalar could not be parsed in the requested field.
    #[error("cannot parse scalar '{0}'")]
    ParseScalar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = LieError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 2");
        assert_eq!(
            LieError::NonZeroSelfBracket("x".into()).to_string(),
            "bracket [x, x] must be zero"
        );
        assert_eq!(
            LieError::InconsistentBracket {
                left: "x".into(),
                right: "y".into()
            }
            .to_string(),
            "inconsistent bracket: [x, y] is not the negation of [y, x]"
        );
    }
}

//! Exact linear algebra over a [`Field`](crate::field::Field).
//!
//! Just enough of a vector-space library for the Lie algebra algorithms:
//! dense [`Vector`]s and [`Matrix`]es, reduced row echelon forms, right
//! kernels, and echelonized [`Subspace`]s.

mod matrix;
mod subspace;
mod vector;

pub use matrix::Matrix;
pub use subspace::Subspace;
pub use vector::Vector;

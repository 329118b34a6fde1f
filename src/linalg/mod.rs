//! Dense eigenvalue computation for small real matrices
//!
//! The root-finder reduces "all roots of p" to "all eigenvalues of the
//! companion matrix of p", so this module provides exactly that pipeline:
//! Hessenberg reduction, shifted QR iteration to real Schur form, and
//! eigenvalue extraction from the resulting quasi-triangular matrix.
//!
//! Matrices are stored row-major in a flat `&[f64]` slice of length `n * n`.
//! The sizes involved are companion matrices of plotting-scale polynomials
//! (degree well under 100), so everything runs dense and in place.

mod eig;
mod schur;

pub use eig::eigenvalues;
pub use schur::{hessenberg_reduction, schur_form};

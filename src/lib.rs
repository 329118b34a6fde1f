//! # polyr
//!
//! **Dense univariate polynomial arithmetic, calculus, and root finding.**
//!
//! polyr provides an immutable polynomial value type with algebraic
//! operators, differentiation to arbitrary order, all-roots computation via
//! companion matrix eigendecomposition, and a reflection/symmetrization
//! transform - plus the sampling and root-trajectory contracts that
//! plotting and animation layers consume.
//!
//! ## Features
//!
//! - **Arithmetic**: `+`, `-`, `*`, scalar division, polynomial long division
//! - **Calculus**: derivatives of arbitrary order, local extrema candidates
//! - **Roots**: all real and complex roots via the companion matrix
//! - **Symmetry**: reflection about an axis `x = alpha` and the even part
//!   of a polynomial about that axis
//! - **Sweeps**: root trajectories of the symmetrized polynomial as the
//!   reflection axis moves, parallelized with rayon
//!
//! ## Quick Start
//!
//! ```
//! use polyr::Polynomial;
//!
//! // p(x) = x² - 1
//! let p = Polynomial::new(vec![-1.0, 0.0, 1.0])?;
//! assert_eq!(p.degree(), 2);
//! assert_eq!(p.eval(3.0), 8.0);
//!
//! // p'(x) = 2x
//! assert_eq!(p.derivative(), Polynomial::new(vec![0.0, 2.0])?);
//!
//! // Roots: ±1
//! let mut roots = p.roots();
//! roots.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
//! assert!((roots[0].re - (-1.0)).abs() < 1e-9);
//! assert!((roots[1].re - 1.0).abs() < 1e-9);
//! # Ok::<(), polyr::Error>(())
//! ```
//!
//! ## Coefficient Convention
//!
//! Polynomials are represented as coefficient vectors in ascending power
//! order: `coefficients[0]` is the constant term and `coefficients[n]` the
//! leading coefficient, so p(x) = c₀ + c₁x + ... + cₙxⁿ. This matches
//! NumPy's polynomial coefficient ordering.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded root-trajectory sweeps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod complex;
pub mod error;
pub mod linalg;
pub mod polynomial;
pub mod sweep;

pub use complex::Complex;
pub use error::{Error, Result};
pub use polynomial::Polynomial;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::error::{Error, Result};
    pub use crate::polynomial::Polynomial;
    pub use crate::sweep::{root_trajectories, RootTrajectories};
}

//! Root finding via companion matrix eigendecomposition
//!
//! # Algorithm
//!
//! For p(x) = c₀ + c₁x + ... + cₙxⁿ:
//! 1. Trim zero leading coefficients (they contribute no roots, only a
//!    degenerate companion matrix).
//! 2. Normalize to monic form: divide the remaining coefficients by cₙ.
//! 3. Build the companion matrix C of the monic polynomial.
//! 4. The eigenvalues of C are exactly the roots.
//!
//! The companion matrix for the monic polynomial xⁿ + aₙ₋₁xⁿ⁻¹ + ... + a₀:
//!
//! ```text
//! C = [ 0   0   ...  0  -a₀  ]
//!     [ 1   0   ...  0  -a₁  ]
//!     [ 0   1   ...  0  -a₂  ]
//!     [ .   .   ...  .   .   ]
//!     [ 0   0   ...  1  -aₙ₋₁]
//! ```

use super::Polynomial;
use crate::complex::Complex;
use crate::linalg;

impl Polynomial {
    /// All roots of the polynomial, real and complex.
    ///
    /// The number of roots equals the *effective* degree - the index of the
    /// highest nonzero coefficient - so a polynomial stored with zero
    /// leading coefficients yields fewer roots than `degree()` suggests.
    /// Constants (and the all-zero polynomial) have none.
    ///
    /// Root order is whatever the eigenvalue scan produces and carries no
    /// meaning; callers wanting a specific order must sort, and tests
    /// should compare root sets with a floating-point tolerance.
    pub fn roots(&self) -> Vec<Complex> {
        let effective_len = match self.coefficients.iter().rposition(|&c| c != 0.0) {
            Some(idx) => idx + 1,
            None => return Vec::new(),
        };
        let coeffs = &self.coefficients[..effective_len];
        let degree = effective_len - 1;

        if degree == 0 {
            return Vec::new();
        }

        linalg::eigenvalues(companion_matrix(coeffs), degree)
    }
}

/// Build the (row-major) companion matrix of a polynomial whose leading
/// coefficient is nonzero: ones on the subdiagonal, the negated monic
/// coefficients in the last column.
fn companion_matrix(coeffs: &[f64]) -> Vec<f64> {
    let degree = coeffs.len() - 1;
    let lead = coeffs[degree];

    let mut companion = vec![0.0; degree * degree];
    for i in 1..degree {
        companion[i * degree + (i - 1)] = 1.0;
    }
    for (i, &c) in coeffs[..degree].iter().enumerate() {
        companion[i * degree + (degree - 1)] = -c / lead;
    }
    companion
}

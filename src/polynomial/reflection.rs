//! Reflection about a vertical axis and symmetrization
//!
//! `reflected_about(alpha)` expands p(alpha - x) term by term with the
//! binomial theorem; `symmetrize(alpha)` averages a polynomial with its
//! reflection, producing the part invariant under `x ↦ alpha - x` (even
//! about the substitution's fixed point `x = alpha/2`).

use super::{Polynomial, DEFAULT_NAME};

/// Binomial coefficient C(n, k) as a float, by the multiplicative formula.
///
/// Exact for every n this crate meets (f64 holds C(n, k) exactly up to
/// n = 57).
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * (n - i) as f64 / (i + 1) as f64;
    }
    acc
}

impl Polynomial {
    /// The expanded polynomial equal to p(alpha - x).
    ///
    /// Each term c·xⁿ becomes c·(alpha - x)ⁿ, expanded via the binomial
    /// theorem: the coefficient at power k picks up
    /// `c · (-1)ᵏ · alphaⁿ⁻ᵏ · C(n, k)`. The constant term passes through
    /// unchanged. Per-term expansions are summed with `+`, so the result
    /// carries the derived name `"h"`.
    pub fn reflected_about(&self, alpha: f64) -> Polynomial {
        let mut result = Polynomial::from_parts(vec![0.0], DEFAULT_NAME);
        for (n, &c) in self.coefficients.iter().enumerate() {
            if n == 0 {
                result = &result + &Polynomial::from_parts(vec![c], DEFAULT_NAME);
                continue;
            }
            let mut term = Vec::with_capacity(n + 1);
            for k in 0..=n {
                let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                term.push(c * sign * alpha.powi((n - k) as i32) * binomial(n, k));
            }
            result = &result + &Polynomial::from_parts(term, DEFAULT_NAME);
        }
        result
    }

    /// The part of the polynomial invariant under `x ↦ alpha - x`:
    /// `(p + p.reflected_about(alpha)) / 2`.
    ///
    /// That substitution has its fixed point at `alpha / 2`, so the result
    /// satisfies `s(alpha/2 + t) == s(alpha/2 - t)` for every t, up to
    /// floating-point error. The result takes the default name.
    pub fn symmetrize(&self, alpha: f64) -> Polynomial {
        let sum = self + &self.reflected_about(alpha);
        let coefficients = sum.coefficients.into_iter().map(|c| c / 2.0).collect();
        Polynomial::from_parts(coefficients, DEFAULT_NAME)
    }
}

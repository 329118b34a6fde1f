//! Differentiation and critical-point candidates

use super::Polynomial;
use crate::complex::Complex;

impl Polynomial {
    /// First derivative by the power rule: the coefficient of x^i becomes
    /// `(i+1) * c[i+1]`.
    ///
    /// Differentiating a constant yields the zero polynomial `[0.0]`. The
    /// result is named after the source with a prime appended (`"f"` →
    /// `"f'"`).
    pub fn derivative(&self) -> Polynomial {
        let name = format!("{}'", self.name);
        if self.degree() == 0 {
            return Polynomial::from_parts(vec![0.0], name);
        }
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| i as f64 * c)
            .collect();
        Polynomial::from_parts(coefficients, name)
    }

    /// n-th derivative.
    ///
    /// `n = 0` returns a clone of the polynomial, `n = 1` is
    /// [`derivative`](Self::derivative), larger orders iterate. Naming
    /// follows the usual convention: `"f''"` for the second derivative,
    /// `"f^(n)"` beyond that.
    pub fn nth_derivative(&self, n: u32) -> Polynomial {
        match n {
            0 => self.clone(),
            1 => self.derivative(),
            _ => {
                let mut result = self.clone();
                for _ in 0..n {
                    result = result.derivative();
                }
                let name = if n == 2 {
                    format!("{}''", self.name)
                } else {
                    format!("{}^({})", self.name, n)
                };
                Polynomial::from_parts(result.coefficients, name)
            }
        }
    }

    /// Roots of the first derivative: the candidate critical points.
    ///
    /// Classification into maxima, minima and saddles is the caller's
    /// concern; complex candidates simply mean the derivative has no real
    /// root there.
    pub fn local_extrema(&self) -> Vec<Complex> {
        self.derivative().roots()
    }
}

//! Point evaluation and curve sampling
//!
//! Evaluation uses Horner's method:
//!
//! ```text
//! result = cₙ
//! for i in (n-1)..0:
//!     result = result * x + cᵢ
//! ```
//!
//! which is numerically stable and needs only n multiplications and n
//! additions.

use super::Polynomial;
use crate::complex::Complex;
use crate::error::{Error, Result};

impl Polynomial {
    /// Evaluate the polynomial at a real point
    pub fn eval(&self, x: f64) -> f64 {
        let mut result = self.coefficients[self.degree()];
        for c in self.coefficients[..self.degree()].iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Evaluate the polynomial at a complex point.
    ///
    /// Used for root residuals: for any `r` in [`roots`](Self::roots),
    /// `eval_complex(r).magnitude()` should be tiny.
    pub fn eval_complex(&self, z: Complex) -> Complex {
        let mut result = Complex::from(self.coefficients[self.degree()]);
        for &c in self.coefficients[..self.degree()].iter().rev() {
            result = result * z + Complex::from(c);
        }
        result
    }

    /// Sample the curve on the half-open range `[start, end)` with the
    /// given step, returning `(x, p(x))` pairs for a plotting layer.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for non-finite bounds or a step that is not a
    /// positive finite number.
    pub fn sample(&self, start: f64, end: f64, step: f64) -> Result<Vec<(f64, f64)>> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::InvalidArgument {
                arg: "range",
                reason: format!("sampling range [{start}, {end}) must be finite"),
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "step",
                reason: format!("step must be a positive finite number, got {step}"),
            });
        }

        if end <= start {
            return Ok(Vec::new());
        }

        // Index-based stepping avoids accumulating float error across the range
        let count = ((end - start) / step).ceil() as usize;
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let x = start + i as f64 * step;
            if x >= end {
                break;
            }
            points.push((x, self.eval(x)));
        }
        Ok(points)
    }
}

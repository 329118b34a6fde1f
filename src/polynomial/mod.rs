//! The dense univariate polynomial value type
//!
//! A [`Polynomial`] is a coefficient vector in ascending power order plus a
//! display name. Every operation returns a new value; nothing mutates an
//! operand, so reusing a polynomial after it appeared on either side of an
//! operator is always safe.
//!
//! # Coefficient Convention
//!
//! `coefficients[0]` is the constant term and `coefficients[n]` the leading
//! coefficient: p(x) = c₀ + c₁x + c₂x² + ... + cₙxⁿ. The stored sequence is
//! taken verbatim - zero coefficients, including a zero leading
//! coefficient, keep their positions, and `degree()` reports the stored
//! length minus one. Callers that want the algebraic degree of something
//! like `[1.0, 0.0]` (a constant stored with an explicit zero x-term) must
//! trim before constructing.

mod arithmetic;
mod calculus;
mod display;
mod eval;
mod reflection;
mod roots;

use crate::error::{Error, Result};

/// Name given to directly constructed polynomials
pub(crate) const DEFAULT_NAME: &str = "f";

/// A dense univariate polynomial with real coefficients
///
/// # Example
///
/// ```
/// use polyr::Polynomial;
///
/// // p(x) = 4 - 4x + x² = (2 - x)²
/// let p = Polynomial::new(vec![4.0, -4.0, 1.0])?;
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.eval(2.0), 0.0);
/// # Ok::<(), polyr::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Polynomial {
    /// Coefficients in ascending power order; never empty
    coefficients: Vec<f64>,
    /// Display label, e.g. `"f"` in `f(x) = ...`
    name: String,
}

impl Polynomial {
    /// Create a polynomial from coefficients in ascending power order.
    ///
    /// The polynomial is named `"f"` for display purposes; use
    /// [`with_name`](Self::with_name) to pick another label.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `coefficients` is empty - the zero polynomial
    /// is spelled `[0.0]`, not `[]`.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        Self::with_name(coefficients, DEFAULT_NAME)
    }

    /// Create a named polynomial from coefficients in ascending power order.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `coefficients` is empty.
    pub fn with_name(coefficients: Vec<f64>, name: impl Into<String>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "coefficients",
                reason: "a polynomial needs at least one coefficient".to_string(),
            });
        }
        Ok(Self {
            coefficients,
            name: name.into(),
        })
    }

    /// Internal constructor for operation results; the non-empty invariant
    /// is the caller's responsibility.
    pub(crate) fn from_parts(coefficients: Vec<f64>, name: impl Into<String>) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self {
            coefficients,
            name: name.into(),
        }
    }

    /// Degree as stored: number of coefficients minus one.
    ///
    /// A zero leading coefficient still counts, see the module docs.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Number of stored coefficients (degree + 1)
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false: a polynomial owns at least one coefficient
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The display label
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient of x^n.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` when `n` exceeds the stored degree.
    pub fn coefficient(&self, n: usize) -> Result<f64> {
        if n > self.degree() {
            return Err(Error::IndexOutOfBounds {
                index: n,
                degree: self.degree(),
            });
        }
        Ok(self.coefficients[n])
    }

    /// The full coefficient slice in ascending power order.
    ///
    /// This is the sequence formatting and plotting layers consume.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Equality is elementwise over the coefficient sequences: same length,
/// identical values in identical positions, no floating-point tolerance.
/// The display name does not participate.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

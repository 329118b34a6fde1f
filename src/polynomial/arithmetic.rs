//! Algebraic operators: addition, subtraction, multiplication, division
//!
//! All operators allocate a fresh coefficient vector; operands are never
//! touched. Sums, differences and products take the conventional derived
//! name `"h"`, quotients `"q"`.

use std::ops::{Add, Mul, Neg, Sub};

use super::{Polynomial, DEFAULT_NAME};
use crate::error::{Error, Result};

impl Polynomial {
    /// Divide every coefficient by a scalar.
    ///
    /// The result takes the default name, like a freshly constructed
    /// polynomial.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `scalar` is zero or not finite.
    pub fn div_scalar(&self, scalar: f64) -> Result<Polynomial> {
        if scalar == 0.0 || !scalar.is_finite() {
            return Err(Error::InvalidArgument {
                arg: "scalar",
                reason: format!("cannot divide a polynomial by {scalar}"),
            });
        }
        let coefficients = self.coefficients.iter().map(|c| c / scalar).collect();
        Ok(Polynomial::from_parts(coefficients, DEFAULT_NAME))
    }

    /// Polynomial long division: `self = quotient * divisor + remainder`.
    ///
    /// Returns `(quotient, remainder)`. The quotient is named `"q"`; the
    /// remainder has length `max(effective divisor degree, 1)`, so an exact
    /// division of linear factors yields the remainder `[0.0]`.
    ///
    /// The precondition compares *stored* degrees, but the elimination runs
    /// against the divisor's highest nonzero coefficient so that a divisor
    /// padded with trailing zeros cannot inject a division by zero.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the dividend's degree is smaller than the
    /// divisor's, or if the divisor has no nonzero coefficient.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        if self.degree() < divisor.degree() {
            return Err(Error::InvalidArgument {
                arg: "divisor",
                reason: format!(
                    "dividend degree {} is smaller than divisor degree {}",
                    self.degree(),
                    divisor.degree()
                ),
            });
        }

        let d = match divisor.coefficients.iter().rposition(|&c| c != 0.0) {
            Some(d) => d,
            None => {
                return Err(Error::InvalidArgument {
                    arg: "divisor",
                    reason: "division by the zero polynomial".to_string(),
                })
            }
        };
        let lead = divisor.coefficients[d];

        let n = self.degree();
        let mut rem = self.coefficients.clone();
        let mut quot = vec![0.0; n - d + 1];

        // Eliminate from the top degree down; after step k the terms of
        // degree d+k and above are exhausted.
        for k in (0..=(n - d)).rev() {
            let q = rem[d + k] / lead;
            quot[k] = q;
            for j in 0..=d {
                rem[j + k] -= q * divisor.coefficients[j];
            }
        }

        rem.truncate(d.max(1));
        Ok((
            Polynomial::from_parts(quot, "q"),
            Polynomial::from_parts(rem, DEFAULT_NAME),
        ))
    }
}

/// Pad-and-sum against the longer operand; on equal lengths the left
/// operand plays the "longer" role (the result is the same either way,
/// every position gets summed).
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let (longer, shorter) = if self.len() >= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coefficients = longer.coefficients.clone();
        for (c, s) in coefficients.iter_mut().zip(&shorter.coefficients) {
            *c += s;
        }
        Polynomial::from_parts(coefficients, "h")
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

/// `a - b` is `a + (-b)`; the negation allocates, so `b` survives the
/// subtraction unchanged.
impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let coefficients = self.coefficients.iter().map(|c| -c).collect();
        Polynomial::from_parts(coefficients, DEFAULT_NAME)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

/// Full convolution: the coefficient at power k is Σᵢ₊ⱼ₌ₖ aᵢ·bⱼ, so the
/// result degree is the sum of the operand degrees.
impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coefficients = vec![0.0; self.len() + rhs.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::from_parts(coefficients, "h")
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::new(coeffs.to_vec()).unwrap()
    }

    #[test]
    fn test_add_same_length() {
        let a = poly(&[1.0, 2.0]);
        let b = poly(&[3.0, -2.0]);
        let c = &a + &b;
        assert_eq!(c, poly(&[4.0, 0.0]));
        assert_eq!(c.name(), "h");
    }

    #[test]
    fn test_add_pads_against_longer() {
        let a = poly(&[1.0, 1.0]);
        let b = poly(&[1.0, 0.0, 5.0, 2.0]);
        assert_eq!(&a + &b, poly(&[2.0, 1.0, 5.0, 2.0]));
        assert_eq!(&b + &a, poly(&[2.0, 1.0, 5.0, 2.0]));
    }

    #[test]
    fn test_sub_leaves_operands_untouched() {
        let a = poly(&[5.0, 1.0]);
        let b = poly(&[2.0, 3.0]);
        let c = &a - &b;
        assert_eq!(c, poly(&[3.0, -2.0]));
        // b must not have been negated in place
        assert_eq!(b, poly(&[2.0, 3.0]));
        assert_eq!(&(&c + &b), &a);
    }

    #[test]
    fn test_neg() {
        let a = poly(&[1.0, -2.0, 0.0]);
        assert_eq!(-&a, poly(&[-1.0, 2.0, -0.0]));
    }

    #[test]
    fn test_mul_squares_binomial() {
        // (1 + x)² = 1 + 2x + x²
        let a = poly(&[1.0, 1.0]);
        let c = &a * &a;
        assert_eq!(c, poly(&[1.0, 2.0, 1.0]));
        assert_eq!(c.name(), "h");
    }

    #[test]
    fn test_mul_difference_of_squares() {
        // (1 - x)(1 + x) = 1 - x²
        let a = poly(&[1.0, -1.0]);
        let b = poly(&[1.0, 1.0]);
        assert_eq!(&a * &b, poly(&[1.0, 0.0, -1.0]));
    }

    #[test]
    fn test_mul_degree_law() {
        let a = poly(&[1.0, 2.0, 3.0]);
        let b = poly(&[4.0, 5.0]);
        // (1 + 2x + 3x²)(4 + 5x) = 4 + 13x + 22x² + 15x³
        let c = &a * &b;
        assert_eq!(c.degree(), a.degree() + b.degree());
        assert_eq!(c, poly(&[4.0, 13.0, 22.0, 15.0]));
    }

    #[test]
    fn test_div_scalar() {
        let a = poly(&[2.0, -4.0, 6.0]);
        let c = a.div_scalar(2.0).unwrap();
        assert_eq!(c, poly(&[1.0, -2.0, 3.0]));
        assert_eq!(c.name(), "f");
    }

    #[test]
    fn test_div_scalar_rejects_zero_and_nan() {
        let a = poly(&[1.0]);
        assert!(a.div_scalar(0.0).is_err());
        assert!(a.div_scalar(f64::NAN).is_err());
        assert!(a.div_scalar(f64::INFINITY).is_err());
    }

    #[test]
    fn test_div_rem_exact() {
        // (x² - 1) / (x - 1) = x + 1, remainder 0
        let a = poly(&[-1.0, 0.0, 1.0]);
        let b = poly(&[-1.0, 1.0]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, poly(&[1.0, 1.0]));
        assert_eq!(q.name(), "q");
        assert_eq!(r, poly(&[0.0]));
    }

    #[test]
    fn test_div_rem_with_remainder() {
        // (x² + 1) / (x + 1): quotient x - 1, remainder 2
        let a = poly(&[1.0, 0.0, 1.0]);
        let b = poly(&[1.0, 1.0]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, poly(&[-1.0, 1.0]));
        assert_eq!(r, poly(&[2.0]));
    }

    #[test]
    fn test_div_rem_constant_divisor() {
        let a = poly(&[2.0, 4.0]);
        let b = poly(&[2.0]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, poly(&[1.0, 2.0]));
        assert_eq!(r, poly(&[0.0]));
    }

    #[test]
    fn test_div_rem_degree_precondition() {
        let a = poly(&[1.0, 1.0]);
        let b = poly(&[1.0, 1.0, 1.0]);
        assert!(a.div_rem(&b).is_err());
    }

    #[test]
    fn test_div_rem_zero_divisor() {
        let a = poly(&[1.0, 1.0]);
        let b = poly(&[0.0, 0.0]);
        let err = a.div_rem(&b).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "divisor", .. }));
    }

    #[test]
    fn test_div_rem_padded_divisor_uses_effective_degree() {
        // Divisor [2, 0] is the constant 2 padded to stored degree 1
        let a = poly(&[2.0, 4.0, 6.0]);
        let b = poly(&[2.0, 0.0]);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, poly(&[1.0, 2.0, 3.0]));
        assert_eq!(r, poly(&[0.0]));
    }
}

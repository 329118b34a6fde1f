//! Human-readable rendering of the polynomial expression
//!
//! Highest power first, zero terms skipped, unit coefficients implicit,
//! coefficients rounded to two decimals: `f(x) = x^2 - 4x + 4`.

use std::fmt;

use super::Polynomial;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x) = ", self.name)?;

        // Round for display, then drop the terms that vanish
        let terms: Vec<(usize, f64)> = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| (i, (c * 100.0).round() / 100.0))
            .filter(|(_, c)| *c != 0.0)
            .collect();

        if terms.is_empty() {
            return write!(f, "0");
        }

        for (pos, &(power, c)) in terms.iter().rev().enumerate() {
            if pos == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = c.abs();
            match power {
                0 => write!(f, "{magnitude}")?,
                1 => {
                    if magnitude == 1.0 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "{magnitude}x")?;
                    }
                }
                _ => {
                    if magnitude == 1.0 {
                        write!(f, "x^{power}")?;
                    } else {
                        write!(f, "{magnitude}x^{power}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

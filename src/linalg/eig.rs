//! Eigenvalue extraction from the real Schur form

use super::schur::schur_form;
use crate::complex::Complex;

/// Compute all eigenvalues of a real `n x n` matrix (row-major).
///
/// # Algorithm
///
/// 1. Reduce the matrix to real Schur form ([`schur_form`]).
/// 2. Walk the diagonal: a 1x1 block is a real eigenvalue; a 2x2 block with
///    a non-negligible subdiagonal entry holds a pair
///    `(a+d)/2 ± sqrt((a-d)²/4 + bc)`, complex conjugate when the
///    discriminant is negative.
///
/// Eigenvalues come back in diagonal-scan order, which carries no
/// mathematical meaning; callers needing a specific order must sort.
pub fn eigenvalues(mut t: Vec<f64>, n: usize) -> Vec<Complex> {
    debug_assert_eq!(t.len(), n * n);

    schur_form(&mut t, n);

    let mut values = Vec::with_capacity(n);
    let eps = f64::EPSILON;

    let mut i = 0;
    while i < n {
        if i == n - 1 {
            // Last diagonal element is a real eigenvalue
            values.push(Complex::new(t[i * n + i], 0.0));
            i += 1;
            continue;
        }

        let subdiag = t[(i + 1) * n + i].abs();
        let diag_scale = t[i * n + i].abs() + t[(i + 1) * n + (i + 1)].abs();
        let threshold = eps * diag_scale.max(1.0);

        if subdiag > threshold {
            // 2x2 block
            // [ a  b ]
            // [ c  d ]  with eigenvalues (a+d)/2 ± sqrt((a-d)²/4 + bc)
            let a = t[i * n + i];
            let b = t[i * n + (i + 1)];
            let c = t[(i + 1) * n + i];
            let d = t[(i + 1) * n + (i + 1)];

            let trace = a + d;
            let disc = (a - d) * (a - d) / 4.0 + b * c;

            if disc < 0.0 {
                let re = trace / 2.0;
                let im = (-disc).sqrt();
                values.push(Complex::new(re, im));
                values.push(Complex::new(re, -im));
            } else {
                // Real pair that the QR sweep had not yet split
                let sqrt_disc = disc.sqrt();
                values.push(Complex::new(trace / 2.0 + sqrt_disc, 0.0));
                values.push(Complex::new(trace / 2.0 - sqrt_disc, 0.0));
            }
            i += 2;
        } else {
            // 1x1 block: real eigenvalue
            values.push(Complex::new(t[i * n + i], 0.0));
            i += 1;
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_by_re(mut values: Vec<Complex>) -> Vec<Complex> {
        values.sort_by(|a, b| {
            a.re.partial_cmp(&b.re)
                .unwrap()
                .then(a.im.partial_cmp(&b.im).unwrap())
        });
        values
    }

    #[test]
    fn test_eigenvalues_diagonal() {
        let t = vec![
            3.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 2.0,
        ];
        let values = sorted_by_re(eigenvalues(t, 3));

        assert_eq!(values.len(), 3);
        assert!((values[0].re - (-1.0)).abs() < 1e-12);
        assert!((values[1].re - 2.0).abs() < 1e-12);
        assert!((values[2].re - 3.0).abs() < 1e-12);
        assert!(values.iter().all(|v| v.im == 0.0));
    }

    #[test]
    fn test_eigenvalues_rotation() {
        // [[0, -1], [1, 0]] rotates by 90°; eigenvalues ±i
        let t = vec![0.0, -1.0, 1.0, 0.0];
        let values = eigenvalues(t, 2);

        assert_eq!(values.len(), 2);
        for v in &values {
            assert!(v.re.abs() < 1e-12, "Real part should be 0, got {}", v.re);
            assert!(
                (v.im.abs() - 1.0).abs() < 1e-12,
                "Imag part should be ±1, got {}",
                v.im
            );
        }
        // Conjugate pair
        assert!((values[0].im + values[1].im).abs() < 1e-12);
    }

    #[test]
    fn test_eigenvalues_general_real() {
        // [[1, 2], [2, 1]] has eigenvalues 3 and -1
        let t = vec![1.0, 2.0, 2.0, 1.0];
        let values = sorted_by_re(eigenvalues(t, 2));

        assert!((values[0].re - (-1.0)).abs() < 1e-10);
        assert!((values[1].re - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_eigenvalues_single() {
        let values = eigenvalues(vec![7.0], 1);
        assert_eq!(values, vec![Complex::new(7.0, 0.0)]);
    }

    #[test]
    fn test_eigenvalues_empty() {
        let values = eigenvalues(vec![], 0);
        assert!(values.is_empty());
    }

    #[test]
    fn test_eigenvalues_mixed_spectrum() {
        // Block diagonal: a rotation block (±i) and a 1x1 block (5)
        let t = vec![
            0.0, -1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 5.0,
        ];
        let values = eigenvalues(t, 3);

        let real_count = values.iter().filter(|v| v.im == 0.0).count();
        assert_eq!(real_count, 1);
        assert!(values.iter().any(|v| (v.re - 5.0).abs() < 1e-10));
        assert!(values.iter().any(|v| (v.im - 1.0).abs() < 1e-10));
        assert!(values.iter().any(|v| (v.im + 1.0).abs() < 1e-10));
    }
}

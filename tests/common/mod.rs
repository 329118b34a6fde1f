//! Common test utilities
#![allow(dead_code)]

use polyr::Complex;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Sort roots by real part, then imaginary part, for order-insensitive
/// comparison (the eigenvalue scan guarantees no particular order).
pub fn sorted_roots(mut roots: Vec<Complex>) -> Vec<Complex> {
    roots.sort_by(|a, b| {
        a.re.partial_cmp(&b.re)
            .unwrap()
            .then(a.im.partial_cmp(&b.im).unwrap())
    });
    roots
}

/// Assert two root sets are equal as multisets within tolerance
pub fn assert_roots_close(actual: Vec<Complex>, expected: Vec<Complex>, tol: f64, msg: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: root count mismatch", msg);
    let actual = sorted_roots(actual);
    let expected = sorted_roots(expected);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (*a - *e).magnitude() <= tol,
            "{}: root {} differs: {} vs {} (tol={})",
            msg,
            i,
            a,
            e,
            tol
        );
    }
}

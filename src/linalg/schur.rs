//! Real Schur form via QR iteration with Wilkinson shift

/// Reduce a matrix to upper Hessenberg form using Householder reflections.
///
/// Modifies `h` in place. A Hessenberg matrix has zeros below the first
/// subdiagonal; QR iteration preserves this shape, which is what makes the
/// iteration cheap enough to run to convergence.
pub fn hessenberg_reduction(h: &mut [f64], n: usize) {
    if n < 3 {
        return;
    }

    for k in 0..(n - 2) {
        // Householder vector for column k, rows k+1 to n-1
        let mut v = vec![0.0; n - k - 1];
        let mut norm_sq = 0.0;

        for i in (k + 1)..n {
            let val = h[i * n + k];
            v[i - k - 1] = val;
            norm_sq += val * val;
        }

        if norm_sq < f64::EPSILON {
            continue;
        }

        let norm = norm_sq.sqrt();
        let x0 = v[0];
        let alpha = if x0 >= 0.0 { -norm } else { norm };

        v[0] = x0 - alpha;

        let mut v_norm_sq = 0.0;
        for vi in &v {
            v_norm_sq += vi * vi;
        }
        if v_norm_sq < f64::EPSILON {
            continue;
        }
        let v_norm = v_norm_sq.sqrt();
        for vi in &mut v {
            *vi /= v_norm;
        }

        // Left multiplication: H[k+1:n, :] -= 2 * v * (v^T @ H[k+1:n, :])
        for j in 0..n {
            let mut dot = 0.0;
            for (i, vi) in v.iter().enumerate() {
                dot += vi * h[(k + 1 + i) * n + j];
            }
            for (i, vi) in v.iter().enumerate() {
                h[(k + 1 + i) * n + j] -= 2.0 * vi * dot;
            }
        }

        // Right multiplication: H[:, k+1:n] -= 2 * (H[:, k+1:n] @ v) * v^T
        for i in 0..n {
            let mut dot = 0.0;
            for (j, vj) in v.iter().enumerate() {
                dot += h[i * n + (k + 1 + j)] * vj;
            }
            for (j, vj) in v.iter().enumerate() {
                h[i * n + (k + 1 + j)] -= 2.0 * dot * vj;
            }
        }
    }
}

/// Reduce a matrix to real Schur (upper quasi-triangular) form in place.
///
/// After this call the matrix is block upper triangular with 1x1 blocks
/// (real eigenvalues) and 2x2 blocks (complex conjugate pairs) on the
/// diagonal, so eigenvalues can be read off block by block, see
/// [`eigenvalues`](super::eigenvalues).
///
/// The iteration works on a shrinking active window: rows deflate off the
/// bottom as their subdiagonal entries become negligible, single shifts
/// come from the window's trailing 2x2 block, and a stalled window gets an
/// exceptional shift every tenth step. The exceptional shift matters for
/// companion matrices of polynomials like xⁿ - 1: those are orthogonal, and
/// unshifted QR on an orthogonal matrix reproduces it exactly, cycling
/// forever. A 2x2 block with complex eigenvalues is deflated as a block -
/// real shifts cannot split it, and the eigenvalue scan reads it whole.
pub fn schur_form(t: &mut [f64], n: usize) {
    if n < 2 {
        return;
    }

    hessenberg_reduction(t, n);

    let max_iter = 30 * n;
    // Last row of the active window
    let mut m = n - 1;
    // QR steps since the window last shrank
    let mut stagnation = 0;

    for _iter in 0..max_iter {
        // Deflate converged rows off the bottom of the window
        loop {
            if m == 0 {
                break;
            }
            if subdiag_negligible(t, n, m) {
                t[m * n + (m - 1)] = 0.0;
                m -= 1;
                stagnation = 0;
                continue;
            }
            if m >= 2 && subdiag_negligible(t, n, m - 1) && is_complex_block(t, n, m - 1) {
                t[(m - 1) * n + (m - 2)] = 0.0;
                m -= 2;
                stagnation = 0;
                continue;
            }
            break;
        }

        if m == 0 || (m == 1 && is_complex_block(t, n, 0)) {
            break;
        }

        stagnation += 1;
        let exceptional = stagnation % 10 == 0;
        qr_iteration_step(t, n, m, exceptional);
    }

    // Clean up small subdiagonal elements to make T exactly quasi-triangular
    for i in 1..n {
        if subdiag_negligible(t, n, i) {
            t[i * n + (i - 1)] = 0.0;
        }
    }

    // Clear the strictly lower triangle below the subdiagonal
    for i in 2..n {
        for j in 0..(i - 1) {
            t[i * n + j] = 0.0;
        }
    }
}

/// True when the subdiagonal entry `(row, row - 1)` is negligible relative
/// to its neighboring diagonal entries.
fn subdiag_negligible(t: &[f64], n: usize, row: usize) -> bool {
    let scale = t[(row - 1) * n + (row - 1)].abs() + t[row * n + row].abs();
    t[row * n + (row - 1)].abs() <= f64::EPSILON * scale.max(1.0)
}

/// True when the 2x2 block at rows `(i, i + 1)` has complex eigenvalues
fn is_complex_block(t: &[f64], n: usize, i: usize) -> bool {
    let a = t[i * n + i];
    let b = t[i * n + (i + 1)];
    let c = t[(i + 1) * n + i];
    let d = t[(i + 1) * n + (i + 1)];
    (a - d) * (a - d) / 4.0 + b * c < 0.0
}

/// Perform one QR iteration step on the active window `0..=m`.
fn qr_iteration_step(h: &mut [f64], n: usize, m: usize, exceptional: bool) {
    let shift = if exceptional {
        // Ad-hoc displacement built from the subdiagonal magnitudes; any
        // value away from the spectrum's symmetries breaks a cycle.
        let mut s = h[m * n + (m - 1)].abs();
        if m >= 2 {
            s += h[(m - 1) * n + (m - 2)].abs();
        }
        s
    } else {
        // Wilkinson shift: eigenvalue of the window's trailing 2x2 block
        // closest to the trailing diagonal entry.
        let a = h[(m - 1) * n + (m - 1)];
        let b = h[(m - 1) * n + m];
        let c = h[m * n + (m - 1)];
        let d = h[m * n + m];

        let trace = a + d;
        let det = a * d - b * c;
        let disc = trace * trace - 4.0 * det;

        if disc >= 0.0 {
            let sqrt_disc = disc.sqrt();
            let lambda1 = (trace + sqrt_disc) / 2.0;
            let lambda2 = (trace - sqrt_disc) / 2.0;
            if (lambda1 - d).abs() < (lambda2 - d).abs() {
                lambda1
            } else {
                lambda2
            }
        } else {
            // Complex eigenvalues, use trace/2 as shift
            trace / 2.0
        }
    };

    // Apply shift: H = H - shift * I
    for i in 0..=m {
        h[i * n + i] -= shift;
    }

    // QR factorization using Givens rotations on each subdiagonal element
    for i in 0..m {
        let a_val = h[i * n + i];
        let b_val = h[(i + 1) * n + i];

        if b_val.abs() < f64::EPSILON {
            continue;
        }

        let r = (a_val * a_val + b_val * b_val).sqrt();
        let c = a_val / r;
        let s = -b_val / r;

        // Apply rotation from the left: rows i and i+1. Columns beyond the
        // window couple the active block to already-deflated rows and must
        // keep being updated to preserve similarity.
        for j in 0..n {
            let t1 = h[i * n + j];
            let t2 = h[(i + 1) * n + j];
            h[i * n + j] = c * t1 - s * t2;
            h[(i + 1) * n + j] = s * t1 + c * t2;
        }

        // Apply rotation from the right: cols i and i+1. Rows below the
        // window hold zeros in these columns, so they can be skipped.
        for k in 0..=m {
            let t1 = h[k * n + i];
            let t2 = h[k * n + (i + 1)];
            h[k * n + i] = c * t1 - s * t2;
            h[k * n + (i + 1)] = s * t1 + c * t2;
        }
    }

    // Remove shift: H = H + shift * I
    for i in 0..=m {
        h[i * n + i] += shift;
    }
}

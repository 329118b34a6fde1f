//! Root trajectories under a sweeping reflection axis
//!
//! An animation layer renders, for each axis position alpha, the complex
//! roots of `p.symmetrize(alpha)` as one frame of points. This module
//! produces exactly that data - one eigensolve per frame - and nothing
//! about timing, figures or encoding.

use crate::complex::Complex;
use crate::polynomial::Polynomial;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Frames are independent eigensolves, so parallelism pays off quickly;
/// below this many frames the rayon overhead outweighs the work.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 16;

/// Root positions of the symmetrized polynomial per axis position
///
/// `frames[i]` holds the roots of `p.symmetrize(alphas[i])`; frame order
/// matches `alphas` regardless of how the work was scheduled.
#[derive(Debug, Clone)]
pub struct RootTrajectories {
    /// The swept axis positions, in input order
    pub alphas: Vec<f64>,
    /// One root set per axis position
    pub frames: Vec<Vec<Complex>>,
}

/// Compute the roots of `p.symmetrize(alpha)` for every alpha.
///
/// Runs frames in parallel when the `rayon` feature is enabled and the
/// sweep is long enough to amortize the fork.
///
/// # Example
///
/// ```
/// use polyr::{Polynomial, sweep::root_trajectories};
///
/// let p = Polynomial::new(vec![0.0, 0.0, 1.0])?; // x²
/// let alphas: Vec<f64> = (-5..=5).map(f64::from).collect();
/// let trajectories = root_trajectories(&p, &alphas);
/// assert_eq!(trajectories.frames.len(), alphas.len());
/// # Ok::<(), polyr::Error>(())
/// ```
pub fn root_trajectories(p: &Polynomial, alphas: &[f64]) -> RootTrajectories {
    #[cfg(feature = "rayon")]
    if alphas.len() >= PARALLEL_THRESHOLD {
        let frames = alphas
            .par_iter()
            .map(|&alpha| p.symmetrize(alpha).roots())
            .collect();
        return RootTrajectories {
            alphas: alphas.to_vec(),
            frames,
        };
    }

    let frames = alphas
        .iter()
        .map(|&alpha| p.symmetrize(alpha).roots())
        .collect();
    RootTrajectories {
        alphas: alphas.to_vec(),
        frames,
    }
}

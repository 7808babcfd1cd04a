//! Convergence by maximum medoid displacement.

use super::provider::Dissimilarity;

/// Largest dissimilarity between a previous medoid and its replacement.
///
/// Positions are compared pairwise: `previous[i]` against `candidate[i]`.
/// An unchanged medoid contributes zero.
pub fn max_displacement<D: Dissimilarity + ?Sized>(
    d: &D,
    previous: &[usize],
    candidate: &[usize],
) -> f64 {
    debug_assert_eq!(previous.len(), candidate.len());

    previous
        .iter()
        .zip(candidate.iter())
        .map(|(&p, &c)| if p == c { 0.0 } else { d.dissimilarity(p, c) })
        .fold(0.0, f64::max)
}

/// Whether a displacement is within tolerance (inclusive).
#[inline]
pub fn is_converged(displacement: f64, tol: f64) -> bool {
    displacement <= tol
}

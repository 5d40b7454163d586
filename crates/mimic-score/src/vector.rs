//! Pose vectors and cosine similarity

use crate::NormalizedPoint;

/// Flatten points into `[x0, y0, z0, x1, y1, z1, ...]`, dropping visibility
pub fn to_vector(points: &[NormalizedPoint]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

/// Cosine of the angle between two vectors.
///
/// Returns `0.0` when the lengths differ or either vector has zero magnitude.
/// Sums are kept in `f64` so no finite `f32` input can overflow them.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !similarity.is_finite() {
        return 0.0;
    }
    // Rounding can push parallel vectors a hair past ±1
    similarity.clamp(-1.0, 1.0) as f32
}

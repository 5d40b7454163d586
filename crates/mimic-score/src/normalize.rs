//! Nose-relative normalization

use mimic_core::{BodyLandmark, Landmark, PoseSnapshot};

/// Landmark position relative to the nose
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Carried through from the tracker, not used for scoring
    pub visibility: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }
}

/// Translate landmarks so the nose sits at the origin.
///
/// Returns an empty vector when no landmarks were detected.
pub fn normalize(landmarks: &[Landmark]) -> Vec<NormalizedPoint> {
    let Some(nose) = landmarks.get(BodyLandmark::ANCHOR.index()) else {
        return Vec::new();
    };

    landmarks
        .iter()
        .map(|lm| NormalizedPoint {
            x: lm.x - nose.x,
            y: lm.y - nose.y,
            z: lm.z - nose.z,
            visibility: lm.visibility,
        })
        .collect()
}

/// Normalize every landmark of a snapshot
#[inline]
pub fn normalize_snapshot(snapshot: &PoseSnapshot) -> Vec<NormalizedPoint> {
    normalize(&snapshot.landmarks)
}

//! Pose snapshot - all landmarks of one tracked frame

use crate::{BodyLandmark, CaptureTime, Landmark, MimicError, MimicResult};

/// Values per landmark in a flat tracker frame: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

/// Landmarks detected in a single video frame
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSnapshot {
    /// Capture time of the frame
    pub timestamp: CaptureTime,

    /// Landmarks in tracker order, empty if no body was detected
    pub landmarks: Vec<Landmark>,
}

impl PoseSnapshot {
    pub fn new(timestamp: CaptureTime, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp,
            landmarks,
        }
    }

    /// Frame without a detected body
    pub fn absent(timestamp: CaptureTime) -> Self {
        Self {
            timestamp,
            landmarks: Vec::new(),
        }
    }

    /// Parse a flat tracker frame laid out as `[x, y, z, visibility]` per landmark.
    ///
    /// An empty frame yields an absent snapshot. Anything else must carry the
    /// full tracker skeleton with finite values.
    pub fn from_flat(timestamp: CaptureTime, data: &[f32]) -> MimicResult<Self> {
        if data.is_empty() {
            return Ok(Self::absent(timestamp));
        }
        if data.len() % VALUES_PER_LANDMARK != 0 {
            return Err(MimicError::MalformedFrame { len: data.len() });
        }

        let count = data.len() / VALUES_PER_LANDMARK;
        if count != BodyLandmark::COUNT {
            return Err(MimicError::LandmarkCount {
                expected: BodyLandmark::COUNT,
                actual: count,
            });
        }

        let landmarks = data
            .chunks_exact(VALUES_PER_LANDMARK)
            .enumerate()
            .map(|(i, c)| Landmark::from_tracker(i, [c[0], c[1], c[2], c[3]]))
            .collect::<MimicResult<Vec<_>>>()?;

        Ok(Self {
            timestamp,
            landmarks,
        })
    }

    /// Is a body present in this frame?
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.landmarks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Get a landmark by body part
    pub fn landmark(&self, which: BodyLandmark) -> Option<&Landmark> {
        self.landmarks.get(which.index())
    }

    /// Same pose moved by a constant offset
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> PoseSnapshot {
        PoseSnapshot {
            timestamp: self.timestamp,
            landmarks: self
                .landmarks
                .iter()
                .map(|lm| lm.translate(dx, dy, dz))
                .collect(),
        }
    }
}

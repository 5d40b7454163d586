//! Landmarks - tracked body keypoints
//!
//! The tracker reports a fixed 33-point skeleton per frame (BlazePose
//! topology). Index 0 is always the nose.

use crate::{MimicError, MimicResult};

/// Body landmark identifier, discriminant is the tracker index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyLandmark {
    // Face
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,

    // Arms
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,

    // Hands
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,

    // Legs
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyLandmark {
    /// Number of landmarks in the tracker skeleton
    pub const COUNT: usize = 33;

    /// Position-normalization anchor
    pub const ANCHOR: BodyLandmark = BodyLandmark::Nose;

    /// All landmarks in tracker order
    pub fn all() -> &'static [BodyLandmark] {
        use BodyLandmark::*;
        &[
            Nose,
            LeftEyeInner,
            LeftEye,
            LeftEyeOuter,
            RightEyeInner,
            RightEye,
            RightEyeOuter,
            LeftEar,
            RightEar,
            MouthLeft,
            MouthRight,
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
            LeftPinky,
            RightPinky,
            LeftIndex,
            RightIndex,
            LeftThumb,
            RightThumb,
            LeftHip,
            RightHip,
            LeftKnee,
            RightKnee,
            LeftAnkle,
            RightAnkle,
            LeftHeel,
            RightHeel,
            LeftFootIndex,
            RightFootIndex,
        ]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<BodyLandmark> {
        Self::all().get(index).copied()
    }
}

/// A single tracked keypoint (normalized image coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the hips, same scale as `x`
    pub z: f32,
    /// Tracker confidence that the point is visible
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Build a landmark from raw tracker output, rejecting NaN and infinities
    pub fn from_tracker(index: usize, values: [f32; 4]) -> MimicResult<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MimicError::NonFiniteLandmark { index });
        }
        let [x, y, z, visibility] = values;
        Ok(Self { x, y, z, visibility })
    }

    /// Same landmark moved by a constant offset
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> Landmark {
        Landmark {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
            visibility: self.visibility,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.visibility.is_finite()
    }
}

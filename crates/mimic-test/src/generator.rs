//! Pose Generator - synthetic skeletons and capture windows
//!
//! Produces tracker-shaped data for tests and benchmarks:
//! - A front-facing standing figure in the 33-point topology
//! - Arm and leg articulation by joint angle
//! - Capture windows with per-frame jitter, a constant stance offset and
//!   frames where the tracker lost the body

use mimic_core::{BodyLandmark, CaptureTime, Landmark, PoseSequence, PoseSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mimic_core::BodyLandmark::*;

/// Standing figure, image-relative (x, y), subject's left on image right
const STANDING: [(f32, f32); BodyLandmark::COUNT] = [
    (0.50, 0.20), // nose
    (0.51, 0.18),
    (0.52, 0.18),
    (0.53, 0.18),
    (0.49, 0.18),
    (0.48, 0.18),
    (0.47, 0.18),
    (0.55, 0.19), // ears
    (0.45, 0.19),
    (0.52, 0.23), // mouth
    (0.48, 0.23),
    (0.60, 0.32), // shoulders
    (0.40, 0.32),
    (0.64, 0.45), // elbows
    (0.36, 0.45),
    (0.66, 0.57), // wrists
    (0.34, 0.57),
    (0.67, 0.60), // hands
    (0.33, 0.60),
    (0.66, 0.61),
    (0.34, 0.61),
    (0.65, 0.59),
    (0.35, 0.59),
    (0.56, 0.60), // hips
    (0.44, 0.60),
    (0.57, 0.75), // knees
    (0.43, 0.75),
    (0.57, 0.90), // ankles
    (0.43, 0.90),
    (0.56, 0.92), // feet
    (0.44, 0.92),
    (0.59, 0.93),
    (0.41, 0.93),
];

const LEFT_HAND: [BodyLandmark; 4] = [LeftWrist, LeftPinky, LeftIndex, LeftThumb];
const RIGHT_HAND: [BodyLandmark; 4] = [RightWrist, RightPinky, RightIndex, RightThumb];
const LEFT_FOOT: [BodyLandmark; 3] = [LeftAnkle, LeftHeel, LeftFootIndex];
const RIGHT_FOOT: [BodyLandmark; 3] = [RightAnkle, RightHeel, RightFootIndex];

/// Joint angles in radians, zero is the standing figure.
///
/// Positive shoulder angles raise the arm outward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Articulation {
    pub left_shoulder: f32,
    pub left_elbow: f32,
    pub right_shoulder: f32,
    pub right_elbow: f32,
    pub left_hip: f32,
    pub right_hip: f32,
}

impl Articulation {
    /// Both arms straight up
    pub fn arms_up() -> Self {
        Articulation {
            left_shoulder: 2.8,
            right_shoulder: 2.8,
            ..Default::default()
        }
    }

    /// Arms out to the sides
    pub fn t_pose() -> Self {
        Articulation {
            left_shoulder: 1.4,
            right_shoulder: 1.4,
            ..Default::default()
        }
    }
}

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Frames per capture window
    pub frames_per_window: usize,
    /// Milliseconds between frames
    pub frame_interval_ms: i64,
    /// Per-coordinate tracker noise amplitude
    pub jitter: f32,
    /// Largest stance offset from the centre of the frame
    pub max_offset: f32,
    /// Probability that a frame has no body
    pub dropout_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            frames_per_window: 90,
            frame_interval_ms: 33,
            jitter: 0.004,
            max_offset: 0.2,
            dropout_prob: 0.05,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Short clean windows for quick tests
    pub fn light() -> Self {
        GeneratorConfig {
            frames_per_window: 15,
            frame_interval_ms: 33,
            jitter: 0.002,
            max_offset: 0.1,
            dropout_prob: 0.0,
            seed: 42,
        }
    }

    /// Long noisy windows with frequent tracking loss
    pub fn heavy() -> Self {
        GeneratorConfig {
            frames_per_window: 300,
            frame_interval_ms: 16,
            jitter: 0.01,
            max_offset: 0.3,
            dropout_prob: 0.2,
            seed: 42,
        }
    }
}

/// Seeded source of synthetic poses
pub struct PoseGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl PoseGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        PoseGenerator { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Standing figure with the given joint angles, no noise
    pub fn pose(&self, articulation: &Articulation) -> Vec<Landmark> {
        let mut points: Vec<(f32, f32)> = STANDING.to_vec();

        bend_limb(
            &mut points,
            LeftShoulder,
            LeftElbow,
            &LEFT_HAND,
            articulation.left_shoulder,
            articulation.left_elbow,
        );
        bend_limb(
            &mut points,
            RightShoulder,
            RightElbow,
            &RIGHT_HAND,
            -articulation.right_shoulder,
            -articulation.right_elbow,
        );
        bend_limb(&mut points, LeftHip, LeftKnee, &LEFT_FOOT, articulation.left_hip, 0.0);
        bend_limb(&mut points, RightHip, RightKnee, &RIGHT_FOOT, -articulation.right_hip, 0.0);

        points
            .into_iter()
            .map(|(x, y)| Landmark::new(x, y, 0.0, 0.95))
            .collect()
    }

    /// Random articulation within comfortable joint ranges
    pub fn random_articulation(&mut self) -> Articulation {
        Articulation {
            left_shoulder: self.rng.gen_range(-0.5..3.0),
            left_elbow: self.rng.gen_range(-1.5..1.5),
            right_shoulder: self.rng.gen_range(-0.5..3.0),
            right_elbow: self.rng.gen_range(-1.5..1.5),
            left_hip: self.rng.gen_range(-0.2..0.6),
            right_hip: self.rng.gen_range(-0.2..0.6),
        }
    }

    /// Random pose, no noise
    pub fn random_pose(&mut self) -> Vec<Landmark> {
        let articulation = self.random_articulation();
        self.pose(&articulation)
    }

    /// Snapshots of a player holding `pose` for one capture window.
    ///
    /// The player stands at a random offset for the whole window; each frame
    /// adds tracker jitter and may lose the body entirely.
    pub fn hold(&mut self, pose: &[Landmark], start: CaptureTime) -> Vec<PoseSnapshot> {
        let offset = self.config.max_offset;
        let dx = self.rng.gen_range(-offset..=offset);
        let dy = self.rng.gen_range(-offset / 2.0..=offset / 2.0);

        let mut frames = Vec::with_capacity(self.config.frames_per_window);
        for i in 0..self.config.frames_per_window {
            let at = CaptureTime::from_millis(
                start.as_millis() + i as i64 * self.config.frame_interval_ms,
            );
            if self.rng.gen_bool(self.config.dropout_prob) {
                frames.push(PoseSnapshot::absent(at));
                continue;
            }

            let mut landmarks = Vec::with_capacity(pose.len());
            for lm in pose {
                let (jx, jy, jz) = self.jitter3();
                landmarks.push(lm.translate(dx + jx, dy + jy, jz));
            }
            frames.push(PoseSnapshot::new(at, landmarks));
        }
        frames
    }

    /// Like [`hold`](Self::hold), keeping only frames with a body
    pub fn hold_sequence(&mut self, pose: &[Landmark], start: CaptureTime) -> PoseSequence {
        let snapshots = self
            .hold(pose, start)
            .into_iter()
            .filter(PoseSnapshot::is_present)
            .collect();
        // Every generated frame shares the same skeleton
        PoseSequence::from_snapshots(snapshots).unwrap_or_default()
    }

    fn jitter3(&mut self) -> (f32, f32, f32) {
        let j = self.config.jitter;
        if j == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.rng.gen_range(-j..=j),
            self.rng.gen_range(-j..=j),
            self.rng.gen_range(-j..=j),
        )
    }
}

/// Lay out a snapshot as the tracker's flat `[x, y, z, visibility]` frame
pub fn to_flat(snapshot: &PoseSnapshot) -> Vec<f32> {
    snapshot
        .landmarks
        .iter()
        .flat_map(|lm| [lm.x, lm.y, lm.z, lm.visibility])
        .collect()
}

/// Rotate a two-segment limb: everything below `root` about `root`, then
/// everything below `joint` about the moved `joint`.
fn bend_limb(
    points: &mut [(f32, f32)],
    root: BodyLandmark,
    joint: BodyLandmark,
    distal: &[BodyLandmark],
    root_angle: f32,
    joint_angle: f32,
) {
    let pivot = points[root.index()];
    for lm in std::iter::once(&joint).chain(distal) {
        points[lm.index()] = rotate(points[lm.index()], pivot, root_angle);
    }

    let pivot = points[joint.index()];
    for lm in distal {
        points[lm.index()] = rotate(points[lm.index()], pivot, joint_angle);
    }
}

/// Rotate about `pivot`; image y grows downward, so positive angles turn a
/// hanging left limb outward and up
fn rotate((x, y): (f32, f32), (px, py): (f32, f32), angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    let (dx, dy) = (x - px, y - py);
    (px + dx * cos + dy * sin, py - dx * sin + dy * cos)
}

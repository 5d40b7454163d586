//! Pose similarity between two capture windows

use mimic_core::{PoseSequence, PoseSnapshot};
use tracing::{debug, trace};

use crate::{cosine_similarity, normalize_snapshot, to_vector};

/// Pick the temporal midpoint, index `len / 2`, as the most motion-stable frame.
///
/// Returns `None` for an empty sequence.
pub fn select_representative(sequence: &PoseSequence) -> Option<&PoseSnapshot> {
    sequence.get(sequence.len() / 2)
}

/// Score how closely `candidate` copies `reference`.
///
/// Result lies in [-1, 1]; realistic poses land in [0, 1]. Either sequence
/// being empty scores `0`.
pub fn calculate_pose_similarity(reference: &PoseSequence, candidate: &PoseSequence) -> f32 {
    let (Some(reference_pose), Some(candidate_pose)) = (
        select_representative(reference),
        select_representative(candidate),
    ) else {
        debug!(
            reference_frames = reference.len(),
            candidate_frames = candidate.len(),
            "empty capture window, scoring 0"
        );
        return 0.0;
    };

    let reference_vector = to_vector(&normalize_snapshot(reference_pose));
    let candidate_vector = to_vector(&normalize_snapshot(candidate_pose));

    if reference_vector.len() != candidate_vector.len() {
        debug!(
            reference_len = reference_vector.len(),
            candidate_len = candidate_vector.len(),
            "skeleton size differs, scoring 0"
        );
    }

    let similarity = cosine_similarity(&reference_vector, &candidate_vector);
    trace!(
        reference_at = reference_pose.timestamp.as_millis(),
        candidate_at = candidate_pose.timestamp.as_millis(),
        similarity,
        "pose scored"
    );
    similarity
}

/// Display score: `similarity * 100` rounded, halves toward positive infinity
pub fn similarity_percent(similarity: f32) -> i32 {
    (similarity * 100.0 + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimic_core::{CaptureTime, Landmark};
    use proptest::prelude::*;

    fn two_point_snapshot(ms: i64, dx: f32, dy: f32) -> PoseSnapshot {
        PoseSnapshot::new(
            CaptureTime::from_millis(ms),
            vec![
                Landmark::new(0.0 + dx, 0.0 + dy, 0.0, 1.0),
                Landmark::new(0.1 + dx, 0.2 + dy, 0.0, 1.0),
            ],
        )
    }

    fn sequence(snapshots: Vec<PoseSnapshot>) -> PoseSequence {
        PoseSequence::from_snapshots(snapshots).unwrap()
    }

    /// Snapshot whose only distinguishing feature is its timestamp
    fn marker(ms: i64) -> PoseSnapshot {
        PoseSnapshot::new(CaptureTime::from_millis(ms), vec![Landmark::default()])
    }

    #[test]
    fn test_select_representative_midpoint() {
        let five = sequence((0..5).map(marker).collect());
        assert_eq!(select_representative(&five).unwrap().timestamp.as_millis(), 2);

        let four = sequence((0..4).map(marker).collect());
        assert_eq!(select_representative(&four).unwrap().timestamp.as_millis(), 2);

        let one = sequence(vec![marker(9)]);
        assert_eq!(select_representative(&one).unwrap().timestamp.as_millis(), 9);

        assert!(select_representative(&PoseSequence::new()).is_none());
    }

    #[test]
    fn test_shifted_copy_scores_one() {
        let reference = sequence((0..3).map(|i| two_point_snapshot(i, 0.0, 0.0)).collect());
        let candidate = sequence((0..3).map(|i| two_point_snapshot(i, 0.5, 0.5)).collect());

        let score = calculate_pose_similarity(&reference, &candidate);
        assert!((score - 1.0).abs() < 1e-5, "score = {}", score);
    }

    #[test]
    fn test_empty_sequences_score_zero() {
        let pose = sequence(vec![two_point_snapshot(0, 0.0, 0.0)]);
        let empty = PoseSequence::new();

        assert_eq!(calculate_pose_similarity(&empty, &pose), 0.0);
        assert_eq!(calculate_pose_similarity(&pose, &empty), 0.0);
        assert_eq!(calculate_pose_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_mismatched_skeletons_score_zero() {
        let reference = sequence(vec![two_point_snapshot(0, 0.0, 0.0)]);
        let candidate = sequence(vec![PoseSnapshot::new(
            CaptureTime::ZERO,
            vec![Landmark::new(0.0, 0.0, 0.0, 1.0); 3],
        )]);

        assert_eq!(calculate_pose_similarity(&reference, &candidate), 0.0);
    }

    #[test]
    fn test_degenerate_pose_scores_zero() {
        // Every landmark on the nose normalizes to the zero vector
        let collapsed = sequence(vec![PoseSnapshot::new(
            CaptureTime::ZERO,
            vec![Landmark::new(0.4, 0.4, 0.0, 1.0); 2],
        )]);
        let pose = sequence(vec![two_point_snapshot(0, 0.0, 0.0)]);

        let score = calculate_pose_similarity(&collapsed, &pose);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
        assert_eq!(calculate_pose_similarity(&collapsed, &collapsed), 0.0);
    }

    #[test]
    fn test_only_midpoint_frame_counts() {
        // Arm raised only in the midpoint frame of the candidate
        let still = |ms| two_point_snapshot(ms, 0.0, 0.0);
        let raised = PoseSnapshot::new(
            CaptureTime::from_millis(1),
            vec![
                Landmark::new(0.0, 0.0, 0.0, 1.0),
                Landmark::new(0.2, -0.1, 0.0, 1.0),
            ],
        );
        let reference = sequence(vec![still(0), still(1), still(2)]);
        let candidate = sequence(vec![still(0), raised, still(2)]);

        // (0.1, 0.2) · (0.2, -0.1) = 0
        assert!(calculate_pose_similarity(&reference, &candidate).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_percent() {
        assert_eq!(similarity_percent(1.0), 100);
        assert_eq!(similarity_percent(0.0), 0);
        assert_eq!(similarity_percent(0.5), 50);
        assert_eq!(similarity_percent(0.875), 88);
        assert_eq!(similarity_percent(-0.875), -87);
    }

    fn arb_pose(len: usize) -> impl Strategy<Value = Vec<Landmark>> {
        prop::collection::vec(
            (0.0f32..1.0, 0.0f32..1.0, -0.5f32..0.5, 0.0f32..1.0)
                .prop_map(|(x, y, z, v)| Landmark::new(x, y, z, v)),
            len,
        )
    }

    fn is_degenerate(landmarks: &[Landmark]) -> bool {
        to_vector(&crate::normalize(landmarks))
            .iter()
            .all(|v| *v == 0.0)
    }

    proptest! {
        #[test]
        fn prop_identity(pose in arb_pose(33)) {
            prop_assume!(!is_degenerate(&pose));
            let seq = sequence(vec![PoseSnapshot::new(CaptureTime::ZERO, pose)]);
            let score = calculate_pose_similarity(&seq, &seq);
            prop_assert!((score - 1.0).abs() < 1e-5);
        }

        #[test]
        fn prop_symmetric(a in arb_pose(33), b in arb_pose(33)) {
            let a = sequence(vec![PoseSnapshot::new(CaptureTime::ZERO, a)]);
            let b = sequence(vec![PoseSnapshot::new(CaptureTime::ZERO, b)]);
            let ab = calculate_pose_similarity(&a, &b);
            let ba = calculate_pose_similarity(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn prop_bounded(a in arb_pose(33), b in arb_pose(33)) {
            let a = sequence(vec![PoseSnapshot::new(CaptureTime::ZERO, a)]);
            let b = sequence(vec![PoseSnapshot::new(CaptureTime::ZERO, b)]);
            let score = calculate_pose_similarity(&a, &b);
            prop_assert!(score.is_finite());
            prop_assert!((-1.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_translation_invariant(
            a in arb_pose(33),
            b in arb_pose(33),
            dx in -1.0f32..1.0,
            dy in -1.0f32..1.0,
            dz in -0.5f32..0.5,
        ) {
            prop_assume!(!is_degenerate(&a) && !is_degenerate(&b));
            let reference = PoseSnapshot::new(CaptureTime::ZERO, a);
            let candidate = PoseSnapshot::new(CaptureTime::ZERO, b);
            let moved = candidate.translate(dx, dy, dz);

            let before = calculate_pose_similarity(&reference.clone().into(), &candidate.into());
            let after = calculate_pose_similarity(&reference.into(), &moved.into());
            prop_assert!((before - after).abs() < 1e-4);
        }
    }
}

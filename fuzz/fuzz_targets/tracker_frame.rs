#![no_main]

//! Tracker frames straight from the boundary must either be rejected or
//! score to a finite value in [-1, 1].

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mimic_core::{CaptureTime, PoseSequence, PoseSnapshot};
use mimic_score::calculate_pose_similarity;

#[derive(Debug, Arbitrary)]
struct Input {
    timestamp: i64,
    reference: Vec<f32>,
    candidate: Vec<f32>,
}

fuzz_target!(|input: Input| {
    let at = CaptureTime::from_millis(input.timestamp);
    let (Ok(reference), Ok(candidate)) = (
        PoseSnapshot::from_flat(at, &input.reference),
        PoseSnapshot::from_flat(at, &input.candidate),
    ) else {
        return;
    };

    let score = calculate_pose_similarity(
        &PoseSequence::from(reference),
        &PoseSequence::from(candidate),
    );
    assert!(score.is_finite());
    assert!((-1.0..=1.0).contains(&score));
});

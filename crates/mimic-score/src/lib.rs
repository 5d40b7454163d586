//! Mimic Pose Scoring
//!
//! How closely does one pose copy another?
//!
//! # Pipeline
//!
//! Sequence → Representative snapshot → Nose-relative points → Flat vector → Cosine
//!
//! The midpoint frame of each capture window stands in for the whole window.
//! Subtracting the nose removes where the player stands in frame, so only the
//! shape of the pose is compared.
//!
//! Scoring is total: empty sequences, mismatched skeletons and degenerate
//! poses all score `0` instead of failing.

pub mod normalize;
pub mod similarity;
pub mod vector;

pub use normalize::*;
pub use similarity::*;
pub use vector::*;

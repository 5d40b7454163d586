//! Mimic Core - Fundamental pose types
//!
//! This crate defines the types shared by the scorer and the game:
//! - Capture timestamps (CaptureTime)
//! - Tracker skeleton topology (BodyLandmark)
//! - Landmarks, per-frame snapshots and capture sequences
//! - Error taxonomy for tracker boundary validation

pub mod time;
pub mod landmark;
pub mod snapshot;
pub mod sequence;
pub mod error;

pub use time::*;
pub use landmark::*;
pub use snapshot::*;
pub use sequence::*;
pub use error::*;

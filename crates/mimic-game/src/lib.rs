//! Mimic Game
//!
//! Player one strikes a pose, player two copies it, the copy is scored.
//!
//! The host owns the camera, the tracker and the screen. It feeds tracked
//! frames into [`RoundController::on_frame`] (or straight into the shared
//! [`CaptureBuffer`] from the frame callback) and calls
//! [`RoundController::tick`] with the current time so capture windows close
//! on schedule.
//!
//! # Phases
//!
//! - Waiting: between rounds, start enabled
//! - Posing: capturing the reference pose
//! - Copying: capturing the attempt
//! - Scoring: showing the result

pub mod capture;
pub mod config;
pub mod round;

pub use capture::*;
pub use config::*;
pub use round::*;

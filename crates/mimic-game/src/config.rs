//! Game configuration

use std::time::Duration;

use mimic_core::{MimicError, MimicResult};

/// Options handed to the external landmark tracker
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerOptions {
    /// Model size: 0 lite, 1 full, 2 heavy
    pub model_complexity: u8,
    /// Let the tracker filter landmarks across frames
    pub smooth_landmarks: bool,
    /// Minimum confidence to report a newly detected body
    pub min_detection_confidence: f32,
    /// Minimum confidence to keep tracking an existing body
    pub min_tracking_confidence: f32,
    /// Camera frame width in pixels
    pub frame_width: u32,
    /// Camera frame height in pixels
    pub frame_height: u32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        TrackerOptions {
            model_complexity: 1,
            smooth_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            frame_width: 640,
            frame_height: 480,
        }
    }
}

impl TrackerOptions {
    pub fn validate(&self) -> MimicResult<()> {
        if self.model_complexity > 2 {
            return Err(MimicError::InvalidConfig(format!(
                "model_complexity must be 0, 1 or 2, got {}",
                self.model_complexity
            )));
        }
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MimicError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(MimicError::InvalidConfig("frame size must be non-zero".into()));
        }
        Ok(())
    }
}

/// Round timing and tracker setup
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// How long the poser holds the pose
    pub posing_window: Duration,
    /// How long the copier gets before the attempt is scored
    pub copying_window: Duration,
    /// Rounds per game
    pub total_rounds: u32,
    /// Tracker setup
    pub tracker: TrackerOptions,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            posing_window: Duration::from_secs(3),
            copying_window: Duration::from_secs(3),
            total_rounds: 3,
            tracker: TrackerOptions::default(),
        }
    }
}

impl GameConfig {
    /// Short windows and a single round, for demos and tests
    pub fn quick() -> Self {
        GameConfig {
            posing_window: Duration::from_millis(500),
            copying_window: Duration::from_millis(500),
            total_rounds: 1,
            tracker: TrackerOptions {
                model_complexity: 0,
                ..TrackerOptions::default()
            },
        }
    }

    pub fn validate(&self) -> MimicResult<()> {
        if self.posing_window.is_zero() || self.copying_window.is_zero() {
            return Err(MimicError::InvalidConfig(
                "capture windows must be non-zero".into(),
            ));
        }
        if self.total_rounds == 0 {
            return Err(MimicError::InvalidConfig("total_rounds must be at least 1".into()));
        }
        self.tracker.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.posing_window, Duration::from_millis(3000));
        assert_eq!(config.total_rounds, 3);
        assert_eq!(config.tracker.model_complexity, 1);
        assert!(config.validate().is_ok());
        assert!(GameConfig::quick().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_window() {
        let config = GameConfig {
            copying_window: Duration::ZERO,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(MimicError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_rounds() {
        let config = GameConfig {
            total_rounds: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_tracker_options() {
        let mut tracker = TrackerOptions {
            min_tracking_confidence: 1.5,
            ..TrackerOptions::default()
        };
        assert!(tracker.validate().is_err());

        tracker.min_tracking_confidence = 0.5;
        tracker.model_complexity = 3;
        assert!(tracker.validate().is_err());

        tracker.model_complexity = 2;
        tracker.frame_height = 0;
        assert!(tracker.validate().is_err());
    }
}

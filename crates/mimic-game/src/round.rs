//! Round controller - phases of one pose-and-copy round

use std::fmt;

use mimic_core::{CaptureTime, MimicError, MimicResult, PoseSequence, PoseSnapshot};
use mimic_score::{calculate_pose_similarity, similarity_percent};
use tracing::debug;

use crate::{CaptureBuffer, GameConfig};

const READY_MESSAGE: &str = "Get ready to play!";

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Between rounds, a new round may start
    Waiting,
    /// Capturing the reference pose
    Posing,
    /// Capturing the copy attempt
    Copying,
    /// Showing the result
    Scoring,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Posing => "posing",
            GamePhase::Copying => "copying",
            GamePhase::Scoring => "scoring",
        }
    }

    /// Frames are being captured in this phase
    pub fn is_capturing(self) -> bool {
        matches!(self, GamePhase::Posing | GamePhase::Copying)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a scored round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub round: u32,
    pub poser: Player,
    pub copier: Player,
    /// Cosine similarity in [-1, 1]
    pub similarity: f32,
    /// Display score, rounded percentage
    pub percent: i32,
    pub reference_frames: usize,
    pub candidate_frames: usize,
}

/// Drives a game through its rounds.
///
/// Headless: the host supplies the clock through `now` arguments and renders
/// `message()` and `can_start()` itself.
#[derive(Debug)]
pub struct RoundController {
    config: GameConfig,
    phase: GamePhase,
    round: u32,
    poser: Player,
    score: f32,
    message: String,
    phase_started_at: CaptureTime,
    reference: PoseSequence,
    capture: CaptureBuffer,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl RoundController {
    /// Create a controller with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a validated custom configuration
    pub fn with_config(config: GameConfig) -> MimicResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        RoundController {
            config,
            phase: GamePhase::Waiting,
            round: 1,
            poser: Player::Player1,
            score: 0.0,
            message: READY_MESSAGE.to_string(),
            phase_started_at: CaptureTime::ZERO,
            reference: PoseSequence::new(),
            capture: CaptureBuffer::new(),
        }
    }

    /// Begin posing. Only valid while waiting.
    pub fn start_round(&mut self, now: CaptureTime) -> MimicResult<()> {
        self.expect_phase(GamePhase::Waiting, "start a round")?;

        self.reference = PoseSequence::new();
        self.capture.open();
        self.enter(GamePhase::Posing, now);
        self.message = format!("{}: Strike a pose!", self.poser);
        Ok(())
    }

    /// Feed one tracked frame. Returns whether it was captured.
    pub fn on_frame(&self, snapshot: PoseSnapshot) -> bool {
        if !self.phase.is_capturing() {
            return false;
        }
        self.capture.record(snapshot)
    }

    /// Advance the clock, closing capture windows that have run their course.
    ///
    /// Returns the result when the copying window closes.
    pub fn tick(&mut self, now: CaptureTime) -> Option<RoundResult> {
        let elapsed = now.elapsed_since(self.phase_started_at);
        match self.phase {
            GamePhase::Posing if elapsed >= self.config.posing_window => {
                self.begin_copying(now);
                None
            }
            GamePhase::Copying if elapsed >= self.config.copying_window => {
                Some(self.score_attempt(now))
            }
            _ => None,
        }
    }

    /// Score the attempt immediately. Only valid while copying.
    pub fn calculate_score(&mut self, now: CaptureTime) -> MimicResult<RoundResult> {
        self.expect_phase(GamePhase::Copying, "score")?;
        Ok(self.score_attempt(now))
    }

    /// Leave the result screen for the next round, swapping who poses
    pub fn next_round(&mut self) -> MimicResult<()> {
        self.expect_phase(GamePhase::Scoring, "advance the round")?;
        if self.round >= self.config.total_rounds {
            return Err(MimicError::GameOver {
                rounds: self.config.total_rounds,
            });
        }

        self.round += 1;
        self.poser = self.poser.other();
        self.reference = PoseSequence::new();
        let now = self.phase_started_at;
        self.enter(GamePhase::Waiting, now);
        self.message = READY_MESSAGE.to_string();
        Ok(())
    }

    fn begin_copying(&mut self, now: CaptureTime) {
        self.reference = self.capture.restart();
        debug!(
            round = self.round,
            reference_frames = self.reference.len(),
            "reference pose captured"
        );
        self.enter(GamePhase::Copying, now);
        self.message = format!("{}: Copy the pose!", self.poser.other());
    }

    fn score_attempt(&mut self, now: CaptureTime) -> RoundResult {
        self.capture.close();
        let candidate = self.capture.take();

        let similarity = calculate_pose_similarity(&self.reference, &candidate);
        let percent = similarity_percent(similarity);

        self.score = similarity;
        self.enter(GamePhase::Scoring, now);
        self.message = format!("Score: {}%", percent);

        RoundResult {
            round: self.round,
            poser: self.poser,
            copier: self.poser.other(),
            similarity,
            percent,
            reference_frames: self.reference.len(),
            candidate_frames: candidate.len(),
        }
    }

    fn enter(&mut self, phase: GamePhase, now: CaptureTime) {
        debug!(round = self.round, from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
        self.phase_started_at = now;
    }

    fn expect_phase(&self, expected: GamePhase, action: &'static str) -> MimicResult<()> {
        if self.phase != expected {
            return Err(MimicError::InvalidPhase {
                phase: self.phase.as_str(),
                action,
            });
        }
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round, starting at 1
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    /// Player striking the pose this round
    pub fn current_player(&self) -> Player {
        self.poser
    }

    /// Similarity of the last scored round
    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a round may be started now
    pub fn can_start(&self) -> bool {
        self.phase == GamePhase::Waiting
    }

    /// Final round has been scored
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Scoring && self.round >= self.config.total_rounds
    }

    /// Reference pose captured this round
    pub fn reference(&self) -> &PoseSequence {
        &self.reference
    }

    /// Buffer handle for a frame producer running outside the controller
    pub fn capture(&self) -> CaptureBuffer {
        self.capture.clone()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

//! Capture buffer - collects tracked frames during a capture window
//!
//! The tracker's frame callback is the producer, the round controller the
//! consumer. Both hold a clone of the same buffer. The controller opens the
//! window, the callback records frames, and at window close the controller
//! takes the sequence out by value.

use std::sync::Arc;

use mimic_core::{PoseSequence, PoseSnapshot};
use parking_lot::Mutex;
use tracing::{trace, warn};

#[derive(Debug, Default)]
struct CaptureState {
    sequence: PoseSequence,
    open: bool,
    dropped: usize,
}

impl CaptureState {
    fn reset(&mut self) {
        self.sequence = PoseSequence::new();
        self.open = true;
        self.dropped = 0;
    }
}

/// Shared, append-only frame buffer for one capture window at a time
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    state: Arc<Mutex<CaptureState>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        CaptureBuffer::default()
    }

    /// Discard anything held and start accepting frames
    pub fn open(&self) {
        self.state.lock().reset();
    }

    /// Move the captured sequence out and start a fresh window under one
    /// lock, so no frame lands between the two.
    pub fn restart(&self) -> PoseSequence {
        let mut state = self.state.lock();
        let sequence = std::mem::take(&mut state.sequence);
        state.reset();
        sequence
    }

    /// Stop accepting frames, keeping what was captured
    pub fn close(&self) {
        self.state.lock().open = false;
    }

    /// Append a tracked frame.
    ///
    /// Returns whether the frame was kept. Frames are dropped while the
    /// window is closed, when no body was detected, or when the skeleton
    /// differs from the frames already captured.
    pub fn record(&self, snapshot: PoseSnapshot) -> bool {
        let mut state = self.state.lock();
        if !state.open {
            trace!(at = snapshot.timestamp.as_millis(), "capture closed, frame ignored");
            return false;
        }
        if !snapshot.is_present() {
            state.dropped += 1;
            trace!(at = snapshot.timestamp.as_millis(), "no body in frame, dropped");
            return false;
        }
        match state.sequence.push(snapshot) {
            Ok(()) => true,
            Err(e) => {
                state.dropped += 1;
                warn!("Dropping tracked frame: {}", e);
                false
            }
        }
    }

    /// Move the captured sequence out, leaving the buffer empty
    pub fn take(&self) -> PoseSequence {
        std::mem::take(&mut self.state.lock().sequence)
    }

    /// Frames captured so far
    pub fn len(&self) -> usize {
        self.state.lock().sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().sequence.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Frames rejected since the window opened
    pub fn dropped(&self) -> usize {
        self.state.lock().dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimic_core::{BodyLandmark, CaptureTime, Landmark};

    fn frame(ms: i64) -> PoseSnapshot {
        PoseSnapshot::new(
            CaptureTime::from_millis(ms),
            vec![Landmark::new(0.5, 0.5, 0.0, 1.0); BodyLandmark::COUNT],
        )
    }

    #[test]
    fn test_closed_buffer_ignores_frames() {
        let buffer = CaptureBuffer::new();
        assert!(!buffer.is_open());
        assert!(!buffer.record(frame(0)));
        assert!(buffer.is_empty());
        assert_eq!(buffer.dropped(), 0);
    }

    #[test]
    fn test_open_record_take() {
        let buffer = CaptureBuffer::new();
        buffer.open();

        assert!(buffer.record(frame(110)));
        assert!(buffer.record(frame(143)));
        assert_eq!(buffer.len(), 2);

        let sequence = buffer.take();
        assert_eq!(sequence.len(), 2);
        assert!(buffer.is_empty());
        assert!(buffer.is_open());
    }

    #[test]
    fn test_drops_absent_and_mismatched_frames() {
        let buffer = CaptureBuffer::new();
        buffer.open();

        assert!(!buffer.record(PoseSnapshot::absent(CaptureTime::from_millis(1))));
        assert!(buffer.record(frame(2)));
        assert!(!buffer.record(PoseSnapshot::new(
            CaptureTime::from_millis(3),
            vec![Landmark::default(); 5],
        )));

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.dropped(), 2);
    }

    #[test]
    fn test_reopen_discards_previous_window() {
        let buffer = CaptureBuffer::new();
        buffer.open();
        buffer.record(frame(1));
        buffer.record(PoseSnapshot::absent(CaptureTime::from_millis(2)));
        buffer.close();
        assert!(!buffer.record(frame(3)));

        buffer.open();
        assert!(buffer.is_empty());
        assert_eq!(buffer.dropped(), 0);
    }

    #[test]
    fn test_restart_hands_over_window() {
        let buffer = CaptureBuffer::new();
        buffer.open();
        buffer.record(frame(1));
        buffer.record(frame(2));
        buffer.record(PoseSnapshot::absent(CaptureTime::from_millis(3)));

        let reference = buffer.restart();
        assert_eq!(reference.len(), 2);
        assert!(buffer.is_open());
        assert!(buffer.is_empty());
        assert_eq!(buffer.dropped(), 0);

        assert!(buffer.record(frame(4)));
        assert_eq!(buffer.take().len(), 1);
    }

    #[test]
    fn test_restart_with_live_producer_loses_nothing() {
        let buffer = CaptureBuffer::new();
        buffer.open();

        let producer = buffer.clone();
        let handle = std::thread::spawn(move || {
            let mut kept = 0;
            for i in 0..200 {
                if producer.record(frame(i)) {
                    kept += 1;
                }
            }
            kept
        });

        let mut captured = 0;
        for _ in 0..20 {
            captured += buffer.restart().len();
        }
        let kept = handle.join().unwrap();
        captured += buffer.take().len();

        assert_eq!(captured, kept);
        assert_eq!(kept, 200);
    }

    #[test]
    fn test_concurrent_producer() {
        let buffer = CaptureBuffer::new();
        buffer.open();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let producer = buffer.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        producer.record(frame(t * 100 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(buffer.take().len(), 100);
    }
}

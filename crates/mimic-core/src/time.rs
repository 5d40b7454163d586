//! Capture time
//!
//! Frames are stamped with wall-clock milliseconds, the resolution the
//! tracker callback reports. Round windows are measured by subtracting
//! two capture times.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Capture time - milliseconds since the Unix epoch
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CaptureTime(pub i64);

impl CaptureTime {
    pub const ZERO: CaptureTime = CaptureTime(0);

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        CaptureTime(millis)
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future
    #[inline]
    pub fn elapsed_since(self, earlier: CaptureTime) -> Duration {
        self - earlier
    }

    /// Later capture time, clamped at `i64::MAX`
    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        CaptureTime(self.0.saturating_add(millis))
    }
}

impl Add<Duration> for CaptureTime {
    type Output = CaptureTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<CaptureTime> for CaptureTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: CaptureTime) -> Self::Output {
        if self.0 <= rhs.0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.0.abs_diff(rhs.0))
    }
}

impl std::fmt::Debug for CaptureTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({}ms)", self.0)
    }
}

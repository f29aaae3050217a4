use crate::foundation::error::{PapillonError, PapillonResult};

/// Wall-clock progress of one morph run.
///
/// Timestamps are host milliseconds (e.g. a frame callback's `now`). Progress never goes
/// backwards: an out-of-order timestamp reports the highest progress seen so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    start_ms: f64,
    duration_ms: f64,
    latest: f64,
}

impl AnimationClock {
    /// Start a clock at `start_ms` that completes after `duration_ms`.
    pub fn new(start_ms: f64, duration_ms: f64) -> PapillonResult<Self> {
        if !start_ms.is_finite() {
            return Err(PapillonError::animation("clock start must be finite"));
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(PapillonError::animation(
                "clock duration must be finite and > 0",
            ));
        }
        Ok(Self {
            start_ms,
            duration_ms,
            latest: 0.0,
        })
    }

    /// Timestamp the clock was started at.
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Configured duration.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Milliseconds since start, never negative.
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// `clamp((now - start) / duration, 0, 1)`, held monotonic.
    pub fn progress(&mut self, now_ms: f64) -> f64 {
        let raw = (self.elapsed_ms(now_ms) / self.duration_ms).clamp(0.0, 1.0);
        if raw > self.latest {
            self.latest = raw;
        }
        self.latest
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

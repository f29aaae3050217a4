use crate::animation::animator::{Animator, AnimatorState, CompletionSink, TickOutcome};
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::render::surface::RenderSurface;

/// Fixed-rate frame timestamps in milliseconds, starting at `start_ms`.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer {
    start_ms: f64,
    interval_ms: f64,
    next: u64,
}

impl FrameTimer {
    /// Timer ticking `fps` times per second.
    pub fn new(start_ms: f64, fps: u32) -> PapillonResult<Self> {
        if fps == 0 {
            return Err(PapillonError::validation("fps must be > 0"));
        }
        Ok(Self {
            start_ms,
            interval_ms: 1000.0 / f64::from(fps),
            next: 0,
        })
    }
}

impl Iterator for FrameTimer {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let t = self.start_ms + self.next as f64 * self.interval_ms;
        self.next += 1;
        Some(t)
    }
}

/// Summary of a [`FrameLoop::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopReport {
    /// Ticks executed (including the completing tick).
    pub frames: u64,
    /// Whether the animator reached `Complete`.
    pub completed: bool,
}

/// Host-owned scheduling loop: one [`Animator::tick`] per timestamp until completion.
#[derive(Clone, Copy, Debug)]
pub struct FrameLoop {
    /// Upper bound on ticks, for unbounded timestamp sources.
    pub max_frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self {
            max_frames: 1_000_000,
        }
    }
}

impl FrameLoop {
    /// Drive `animator` with `timestamps`, starting it on the first one if still idle.
    ///
    /// `on_frame` observes the surface after every tick. The loop returns as soon as a tick
    /// reports `done`, when the timestamps run out, or after `max_frames` ticks.
    pub fn run<S, I, F>(
        &self,
        animator: &mut Animator,
        surface: &mut S,
        completion: &mut dyn CompletionSink,
        timestamps: I,
        on_frame: F,
    ) -> PapillonResult<LoopReport>
    where
        S: RenderSurface,
        I: IntoIterator<Item = f64>,
        F: FnMut(u64, &TickOutcome, &S) -> PapillonResult<()>,
    {
        if animator.state() == AnimatorState::Complete {
            return Ok(LoopReport {
                frames: 0,
                completed: true,
            });
        }
        self.drive(
            surface,
            timestamps,
            |now_ms, surface| {
                if animator.state() == AnimatorState::Idle {
                    animator.start(now_ms, &*surface)?;
                }
                animator.tick(now_ms, surface, &mut *completion)
            },
            on_frame,
        )
    }

    /// The loop itself: call `step` once per timestamp until it reports `done`.
    ///
    /// `step` owns starting and ticking whatever it animates, so hosts that wrap an
    /// [`Animator`] (a landing session, say) share the same scheduling rules.
    #[tracing::instrument(skip_all)]
    pub fn drive<S, I, T, F>(
        &self,
        surface: &mut S,
        timestamps: I,
        mut step: T,
        mut on_frame: F,
    ) -> PapillonResult<LoopReport>
    where
        S: RenderSurface,
        I: IntoIterator<Item = f64>,
        T: FnMut(f64, &mut S) -> PapillonResult<TickOutcome>,
        F: FnMut(u64, &TickOutcome, &S) -> PapillonResult<()>,
    {
        let mut report = LoopReport::default();
        for now_ms in timestamps.into_iter().take(self.max_frames as usize) {
            let outcome = step(now_ms, surface)?;
            on_frame(report.frames, &outcome, &*surface)?;
            report.frames += 1;
            if outcome.done {
                report.completed = true;
                break;
            }
        }

        tracing::debug!(
            frames = report.frames,
            completed = report.completed,
            "frame loop finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame_loop.rs"]
mod tests;

use crate::animation::clock::AnimationClock;
use crate::animation::ease::Ease;
use crate::animation::particles::ParticleSet;
use crate::config::settings::MorphConfig;
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::render::surface::{PointCloud, PointStyle, RenderSurface};

/// Lifecycle of one morph run. `Complete` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    /// Constructed, not yet started.
    Idle,
    /// Ticking toward the target silhouette.
    Running,
    /// Progress reached 1; further ticks are no-ops.
    Complete,
}

/// Accumulated cosmetic rotation of the point cloud, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spin {
    /// Rotation about the x axis.
    pub x: f32,
    /// Rotation about the y axis.
    pub y: f32,
}

/// Receiver of the one-shot "morph finished" signal (reveals the call-to-action).
pub trait CompletionSink {
    /// Called exactly once, on the tick where progress reaches 1.
    fn morph_complete(&mut self);
}

/// Result of a single [`Animator::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
    /// Eased progress used for interpolation.
    pub eased: f64,
    /// `true` once the animator is complete; the host should stop scheduling ticks.
    pub done: bool,
}

/// Drives a [`ParticleSet`] from its initial cloud to its target over a fixed duration.
///
/// The animator owns its buffers and timing state; the host owns the frame loop and calls
/// [`Animator::tick`] once per display refresh.
#[derive(Debug)]
pub struct Animator {
    particles: ParticleSet,
    duration_ms: f64,
    ease: Ease,
    spin_y: f32,
    spin_x: f32,
    wobble_period_ms: f64,
    style: PointStyle,

    state: AnimatorState,
    clock: Option<AnimationClock>,
    progress: f64,
    spin: Spin,
}

impl Animator {
    /// Build an idle animator over `particles` using the timing and style from `cfg`.
    pub fn new(particles: ParticleSet, cfg: &MorphConfig) -> PapillonResult<Self> {
        cfg.validate()?;
        Ok(Self {
            particles,
            duration_ms: cfg.duration_ms,
            ease: cfg.ease,
            spin_y: cfg.spin_y,
            spin_x: cfg.spin_x,
            wobble_period_ms: cfg.wobble_period_ms,
            style: cfg.style,
            state: AnimatorState::Idle,
            clock: None,
            progress: 0.0,
            spin: Spin::default(),
        })
    }

    /// Capture the start time. Fails when the surface cannot schedule frames or when the
    /// animator was already started.
    pub fn start(&mut self, now_ms: f64, surface: &dyn RenderSurface) -> PapillonResult<()> {
        if self.state != AnimatorState::Idle {
            return Err(PapillonError::animation("animator was already started"));
        }
        if !surface.frame_scheduling_available() {
            return Err(PapillonError::animation(
                "render surface cannot schedule frames",
            ));
        }
        self.clock = Some(AnimationClock::new(now_ms, self.duration_ms)?);
        self.state = AnimatorState::Running;
        tracing::debug!(
            now_ms,
            duration_ms = self.duration_ms,
            particles = self.particles.len(),
            "morph started"
        );
        Ok(())
    }

    /// Advance to `now_ms`: ease, interpolate every particle, render once, and signal
    /// completion on the tick where progress reaches 1.
    ///
    /// A failed submit leaves progress, spin and state as they were, so the tick can be
    /// retried.
    pub fn tick(
        &mut self,
        now_ms: f64,
        surface: &mut dyn RenderSurface,
        completion: &mut dyn CompletionSink,
    ) -> PapillonResult<TickOutcome> {
        match self.state {
            AnimatorState::Idle => {
                return Err(PapillonError::animation("tick called before start"));
            }
            AnimatorState::Complete => {
                return Ok(TickOutcome {
                    progress: 1.0,
                    eased: 1.0,
                    done: true,
                });
            }
            AnimatorState::Running => {}
        }

        let clock = self
            .clock
            .as_mut()
            .ok_or_else(|| PapillonError::animation("running animator has no clock"))?;
        let progress = clock.progress(now_ms);
        let elapsed = clock.elapsed_ms(now_ms);
        let eased = self.ease.apply(progress);

        let spin = Spin {
            x: self.spin.x + self.spin_x * (elapsed / self.wobble_period_ms).sin() as f32,
            y: self.spin.y + self.spin_y * (1.0 - progress as f32),
        };
        self.particles.interpolate(eased);
        surface.submit_points(&PointCloud {
            positions: self.particles.current(),
            spin,
            style: &self.style,
        })?;
        // Only a rendered tick advances the observable state.
        self.progress = progress;
        self.spin = spin;

        let done = progress >= 1.0;
        if done {
            self.state = AnimatorState::Complete;
            tracing::debug!(now_ms, "morph complete");
            completion.morph_complete();
        }

        Ok(TickOutcome {
            progress,
            eased,
            done,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Linear progress as of the last tick.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Accumulated cosmetic rotation.
    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// The particle buffers.
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Point appearance used for every submit.
    pub fn style(&self) -> &PointStyle {
        &self.style
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;

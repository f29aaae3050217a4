use crate::animation::animator::{Animator, AnimatorState, TickOutcome};
use crate::animation::particles::ParticleSet;
use crate::config::settings::{AppConfig, LandingConfig};
use crate::foundation::core::Viewport;
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::gallery::source::ManifestSource;
use crate::gallery::view::{Gallery, GalleryHost, load_gallery};
use crate::readiness::wait::{ReadinessOpts, wait_until_ready};
use crate::render::frame_loop::{FrameLoop, LoopReport};
use crate::render::surface::RenderSurface;
use crate::shape::outline::Outline;
use crate::shape::sampler::{SampleOpts, sample};
use crate::ui::host::UiHost;
use crate::ui::landing::{EnterOutcome, FallbackNotice, Landing, RevealCallToAction};
use rand::Rng;

/// Wait for the graphics dependency reported by `probe`.
///
/// On timeout the call-to-action text is replaced with the configured fallback message and
/// `None` is returned; the caller should take no further action.
pub async fn await_graphics<T, F>(
    ui: &mut dyn UiHost,
    cfg: &LandingConfig,
    probe: F,
) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    match wait_until_ready("graphics library", probe, ReadinessOpts::from(cfg)).await {
        Ok(v) => Some(v),
        Err(e) => {
            FallbackNotice::new(cfg.dependency_fallback_text.clone()).show(ui, &e);
            None
        }
    }
}

/// One page life of the landing: particle morph, enter gate, then the gallery.
///
/// Construction front-loads element binding, the random start cloud and outline sampling;
/// afterwards the host only forwards frame timestamps and clicks.
#[derive(Debug)]
pub struct LandingSession {
    cfg: AppConfig,
    landing: Landing,
    animator: Animator,
    gallery: Option<Gallery>,
}

impl LandingSession {
    /// Bind to `ui` and build the particle buffers targeting `outline`.
    #[tracing::instrument(skip_all, fields(particles = cfg.morph.particle_count))]
    pub fn prepare<R: Rng + ?Sized>(
        ui: &dyn UiHost,
        cfg: AppConfig,
        outline: &Outline,
        rng: &mut R,
    ) -> PapillonResult<Self> {
        cfg.validate()?;
        let landing = Landing::bind(ui, cfg.morph.enter_threshold)?;
        let n = cfg.morph.particle_count;
        let initial = ParticleSet::scatter(n, cfg.morph.initial_extent, rng);
        let target = sample(outline, n, &SampleOpts::from(&cfg.morph), rng)?;
        let animator = Animator::new(ParticleSet::new(initial, target)?, &cfg.morph)?;
        Ok(Self {
            cfg,
            landing,
            animator,
            gallery: None,
        })
    }

    /// Size the surface and start the morph clock.
    pub fn start(
        &mut self,
        now_ms: f64,
        surface: &mut dyn RenderSurface,
        viewport: Viewport,
    ) -> PapillonResult<()> {
        surface.set_viewport(viewport)?;
        self.animator.start(now_ms, &*surface)
    }

    /// Forward a window resize to the surface.
    pub fn resize(
        &self,
        surface: &mut dyn RenderSurface,
        viewport: Viewport,
    ) -> PapillonResult<()> {
        surface.set_viewport(viewport)
    }

    /// One frame callback. Reveals the call-to-action on completion.
    pub fn frame(
        &mut self,
        now_ms: f64,
        surface: &mut dyn RenderSurface,
        ui: &mut dyn UiHost,
    ) -> PapillonResult<TickOutcome> {
        self.animator
            .tick(now_ms, surface, &mut RevealCallToAction::new(ui))
    }

    /// Run the morph under `frame_loop`: size the surface and start on the first timestamp,
    /// then one [`LandingSession::frame`] per timestamp until completion.
    pub fn run<S, I, F>(
        &mut self,
        frame_loop: &FrameLoop,
        surface: &mut S,
        ui: &mut dyn UiHost,
        viewport: Viewport,
        timestamps: I,
        on_frame: F,
    ) -> PapillonResult<LoopReport>
    where
        S: RenderSurface,
        I: IntoIterator<Item = f64>,
        F: FnMut(u64, &TickOutcome, &S) -> PapillonResult<()>,
    {
        if self.animator.state() == AnimatorState::Complete {
            return Ok(LoopReport {
                frames: 0,
                completed: true,
            });
        }
        frame_loop.drive(
            surface,
            timestamps,
            |now_ms, surface| {
                if self.animator.state() == AnimatorState::Idle {
                    self.start(now_ms, surface, viewport)?;
                }
                self.frame(now_ms, surface, &mut *ui)
            },
            on_frame,
        )
    }

    /// Handle an enter click; on the first accepted click, load and show the gallery.
    ///
    /// A gallery load failure is already shown in the card container, so it does not fail
    /// the click.
    pub async fn enter<H, S>(&mut self, host: &mut H, source: &S) -> EnterOutcome
    where
        H: UiHost + GalleryHost,
        S: ManifestSource,
    {
        let outcome = self.landing.enter_site(host, &self.animator);
        if outcome == EnterOutcome::Entered {
            self.gallery = load_gallery(source, host, &self.cfg.landing).await.ok();
        }
        outcome
    }

    /// Open a category card.
    pub fn open_category(
        &self,
        host: &mut dyn GalleryHost,
        category: &str,
    ) -> PapillonResult<()> {
        match &self.gallery {
            Some(g) => g.open_in(host, category),
            None => Err(PapillonError::validation("gallery is not loaded")),
        }
    }

    /// The morph animator.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// The loaded gallery, once entered.
    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.cfg
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/landing_session.rs"]
mod tests;

use crate::animation::animator::{Animator, AnimatorState, CompletionSink};
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::ui::host::{UiHost, ids, require_elements};
use std::time::Duration;

const LANDING_FADE: Duration = Duration::from_millis(800);

/// Outcome of an "enter" click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// The landing was dismissed and the site shown; the gallery should be built now.
    Entered,
    /// The click arrived too early or after the site was already entered.
    Ignored,
}

/// Landing page controller bound to a document.
#[derive(Clone, Debug)]
pub struct Landing {
    enter_threshold: f64,
    entered: bool,
}

impl Landing {
    /// Verify the landing elements exist. A missing element aborts initialisation; it is
    /// logged but never shown to the user.
    pub fn bind(ui: &dyn UiHost, enter_threshold: f64) -> PapillonResult<Self> {
        require_elements(ui, &ids::LANDING_REQUIRED)?;
        Ok(Self {
            enter_threshold,
            entered: false,
        })
    }

    /// Handle a click on the call-to-action or the canvas.
    ///
    /// Accepted only once, and only after the morph completed with progress at or past the
    /// enter threshold.
    pub fn enter_site(&mut self, ui: &mut dyn UiHost, animator: &Animator) -> EnterOutcome {
        if self.entered
            || animator.state() != AnimatorState::Complete
            || animator.progress() < self.enter_threshold
        {
            return EnterOutcome::Ignored;
        }
        ui.fade_out(ids::LANDING, LANDING_FADE);
        ui.set_visible(ids::SITE, true);
        self.entered = true;
        tracing::debug!("entered site");
        EnterOutcome::Entered
    }

    /// Whether the site was entered.
    pub fn entered(&self) -> bool {
        self.entered
    }
}

/// [`CompletionSink`] that reveals the call-to-action element.
pub struct RevealCallToAction<'a> {
    ui: &'a mut dyn UiHost,
}

impl<'a> RevealCallToAction<'a> {
    /// Wrap a document.
    pub fn new(ui: &'a mut dyn UiHost) -> Self {
        Self { ui }
    }
}

impl CompletionSink for RevealCallToAction<'_> {
    fn morph_complete(&mut self) {
        self.ui.reveal(ids::CALL_TO_ACTION);
    }
}

/// User-visible notice for a graphics dependency that never became available.
#[derive(Clone, Debug)]
pub struct FallbackNotice {
    text: String,
    shown: bool,
}

impl FallbackNotice {
    /// Notice with the given call-to-action replacement text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: false,
        }
    }

    /// Replace the call-to-action text, once. Returns `true` when the text was written.
    pub fn show(&mut self, ui: &mut dyn UiHost, cause: &PapillonError) -> bool {
        tracing::error!(error = %cause, "graphics dependency failed to load");
        if self.shown || !ui.has_element(ids::CALL_TO_ACTION) {
            return false;
        }
        ui.set_text(ids::CALL_TO_ACTION, &self.text);
        self.shown = true;
        true
    }

    /// Whether the notice was displayed.
    pub fn shown(&self) -> bool {
        self.shown
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/landing.rs"]
mod tests;

use crate::foundation::error::{PapillonError, PapillonResult};
use crate::gallery::view::{CategoryView, GalleryCard, GalleryHost};
use std::collections::BTreeMap;
use std::time::Duration;

/// Element identifiers the landing page and gallery bind to.
pub mod ids {
    /// Drawing canvas of the particle field.
    pub const CANVAS: &str = "canvas";
    /// Call-to-action revealed when the morph completes.
    pub const CALL_TO_ACTION: &str = "butterfly-click";
    /// Container of the gallery site.
    pub const SITE: &str = "site";
    /// Container of the landing animation.
    pub const LANDING: &str = "landing";
    /// Gallery card container.
    pub const CATEGORIES: &str = "categories";
    /// Category modal.
    pub const MODAL: &str = "modal";
    /// Media grid inside the modal.
    pub const MODAL_CONTENT: &str = "modal-content";
    /// Modal close button.
    pub const MODAL_CLOSE: &str = "modal-close";

    /// Elements the landing cannot run without.
    pub const LANDING_REQUIRED: [&str; 4] = [CANVAS, CALL_TO_ACTION, SITE, LANDING];
    /// Elements the category modal cannot run without.
    pub const MODAL_REQUIRED: [&str; 3] = [MODAL, MODAL_CONTENT, MODAL_CLOSE];
}

/// Document-side capabilities: element lookup plus text and visibility changes.
pub trait UiHost {
    /// `true` when an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;
    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str);
    /// Show or hide the element.
    fn set_visible(&mut self, id: &str, visible: bool);
    /// Bring a pre-hidden element into view (full opacity, resting position).
    fn reveal(&mut self, id: &str);
    /// Fade the element out over `duration`, hiding it afterwards.
    fn fade_out(&mut self, id: &str, duration: Duration);
}

/// Fail with [`PapillonError::MissingElement`] unless every id in `required` exists.
pub fn require_elements(ui: &dyn UiHost, required: &[&str]) -> PapillonResult<()> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|id| !ui.has_element(id))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    tracing::error!(?missing, "required DOM elements not found");
    Err(PapillonError::missing_element(missing.join(", ")))
}

/// Observable state of one element in a [`RecordingUi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    /// Text content, if it was ever set.
    pub text: Option<String>,
    /// Visibility.
    pub visible: bool,
    /// Whether `reveal` was applied.
    pub revealed: bool,
    /// Number of `set_text` calls.
    pub text_writes: usize,
}

/// Everything a [`RecordingUi`] was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// `set_text`.
    Text {
        /// Element id.
        id: String,
        /// New text.
        text: String,
    },
    /// `set_visible`.
    Visible {
        /// Element id.
        id: String,
        /// New visibility.
        visible: bool,
    },
    /// `reveal`.
    Reveal {
        /// Element id.
        id: String,
    },
    /// `fade_out`.
    FadeOut {
        /// Element id.
        id: String,
        /// Fade duration.
        duration: Duration,
    },
    /// Gallery cards rendered.
    Cards {
        /// Card labels in display order.
        labels: Vec<String>,
    },
    /// Category modal opened.
    ModalOpened {
        /// Category name.
        category: String,
        /// Media URLs in display order.
        urls: Vec<String>,
    },
    /// Category modal closed.
    ModalClosed,
}

/// In-memory document used by tests and the command-line driver.
#[derive(Clone, Debug, Default)]
pub struct RecordingUi {
    elements: BTreeMap<String, ElementState>,
    events: Vec<UiEvent>,
    cards: Vec<GalleryCard>,
    modal: Option<CategoryView>,
}

impl RecordingUi {
    /// A document with exactly the given elements, all hidden.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let elements = ids
            .into_iter()
            .map(|id| (id.to_string(), ElementState::default()))
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }

    /// A document containing every landing, gallery and modal element.
    pub fn full_page() -> Self {
        let mut all = ids::LANDING_REQUIRED.to_vec();
        all.push(ids::CATEGORIES);
        all.extend(ids::MODAL_REQUIRED);
        Self::with_elements(all)
    }

    /// State of one element.
    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    /// Text content of one element.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.text.as_deref())
    }

    /// Visibility of one element (`false` when absent).
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Recorded events.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Cards currently shown.
    pub fn cards(&self) -> &[GalleryCard] {
        &self.cards
    }

    /// Modal contents, when open.
    pub fn modal(&self) -> Option<&CategoryView> {
        self.modal.as_ref()
    }
}

impl UiHost for RecordingUi {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.text = Some(text.to_string());
            e.text_writes += 1;
            self.events.push(UiEvent::Text {
                id: id.to_string(),
                text: text.to_string(),
            });
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(e) = self.elements.get_mut(id) {
            e.visible = visible;
            self.events.push(UiEvent::Visible {
                id: id.to_string(),
                visible,
            });
        }
    }

    fn reveal(&mut self, id: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.revealed = true;
            e.visible = true;
            self.events.push(UiEvent::Reveal { id: id.to_string() });
        }
    }

    fn fade_out(&mut self, id: &str, duration: Duration) {
        if let Some(e) = self.elements.get_mut(id) {
            e.visible = false;
            self.events.push(UiEvent::FadeOut {
                id: id.to_string(),
                duration,
            });
        }
    }
}

impl GalleryHost for RecordingUi {
    fn show_cards(&mut self, cards: &[GalleryCard]) -> PapillonResult<()> {
        require_elements(&*self, &[ids::CATEGORIES])?;
        self.cards = cards.to_vec();
        self.events.push(UiEvent::Cards {
            labels: cards.iter().map(|c| c.label.clone()).collect(),
        });
        Ok(())
    }

    fn show_error(&mut self, text: &str) {
        self.cards.clear();
        self.set_text(ids::CATEGORIES, text);
    }

    fn open_modal(&mut self, view: &CategoryView) -> PapillonResult<()> {
        require_elements(&*self, &ids::MODAL_REQUIRED)?;
        self.events.push(UiEvent::ModalOpened {
            category: view.category.clone(),
            urls: view.items.iter().map(|i| i.url.clone()).collect(),
        });
        self.modal = Some(view.clone());
        self.set_visible(ids::MODAL, true);
        Ok(())
    }

    fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            self.events.push(UiEvent::ModalClosed);
        }
        self.set_visible(ids::MODAL, false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/host.rs"]
mod tests;

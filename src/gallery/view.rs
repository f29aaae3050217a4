use crate::config::settings::LandingConfig;
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::gallery::manifest::{Manifest, MediaKind, resolve_url};
use crate::gallery::source::ManifestSource;

/// One clickable category card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GalleryCard {
    /// Category name as found in the manifest.
    pub category: String,
    /// Upper-cased display label.
    pub label: String,
    /// Resolved preview image URL; `None` for an empty category.
    pub preview_url: Option<String>,
    /// Alternative text for the preview.
    pub alt: String,
}

/// One entry of an opened category.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MediaItem {
    /// Resolved media URL.
    pub url: String,
    /// How the media is presented.
    pub kind: MediaKind,
    /// Alternative text (images only use it).
    pub alt: String,
}

/// Contents of the category modal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CategoryView {
    /// Category name.
    pub category: String,
    /// Media in manifest order.
    pub items: Vec<MediaItem>,
}

/// Where gallery output goes: card container, error text, and the category modal.
pub trait GalleryHost {
    /// Replace the card container's content with `cards`.
    fn show_cards(&mut self, cards: &[GalleryCard]) -> PapillonResult<()>;
    /// Replace the card container's content with an error message.
    fn show_error(&mut self, text: &str);
    /// Fill and show the category modal.
    fn open_modal(&mut self, view: &CategoryView) -> PapillonResult<()>;
    /// Hide the category modal.
    fn close_modal(&mut self);
}

/// Gallery built from a manifest, resolving media against a CDN base.
#[derive(Clone, Debug)]
pub struct Gallery {
    cdn_base: String,
    manifest: Manifest,
}

impl Gallery {
    /// Bind a manifest to the base URL its relative paths live under.
    pub fn new(manifest: Manifest, cdn_base: impl Into<String>) -> Self {
        Self {
            cdn_base: cdn_base.into(),
            manifest,
        }
    }

    /// Underlying manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// One card per category, in manifest order.
    pub fn cards(&self) -> Vec<GalleryCard> {
        self.manifest
            .categories()
            .iter()
            .map(|c| GalleryCard {
                category: c.name.clone(),
                label: c.name.to_uppercase(),
                preview_url: c.preview().map(|f| resolve_url(&self.cdn_base, f)),
                alt: c.name.clone(),
            })
            .collect()
    }

    /// Every file of `category`, in order.
    pub fn open(&self, category: &str) -> Option<CategoryView> {
        let c = self.manifest.category(category)?;
        Some(CategoryView {
            category: c.name.clone(),
            items: c
                .files
                .iter()
                .map(|f| MediaItem {
                    url: resolve_url(&self.cdn_base, f),
                    kind: MediaKind::of(f),
                    alt: c.name.clone(),
                })
                .collect(),
        })
    }

    /// Open `category` in the host's modal (a card click).
    pub fn open_in(&self, host: &mut dyn GalleryHost, category: &str) -> PapillonResult<()> {
        let view = self.open(category).ok_or_else(|| {
            PapillonError::validation(format!("unknown gallery category '{category}'"))
        })?;
        host.open_modal(&view)
    }
}

/// Fetch the manifest once and show its cards.
///
/// Fetch or parse failures replace the card container's content with
/// `"<gallery_error_prefix>: <error>"` and are returned; there is no retry. A missing card
/// container is logged and returned without user-visible text.
#[tracing::instrument(skip_all)]
pub async fn load_gallery<S>(
    source: &S,
    host: &mut dyn GalleryHost,
    cfg: &LandingConfig,
) -> PapillonResult<Gallery>
where
    S: ManifestSource,
{
    let fetched = match source.fetch_manifest().await {
        Ok(body) => Manifest::from_json(&body),
        Err(e) => Err(e),
    };
    let manifest = match fetched {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "failed to load gallery");
            host.show_error(&format!("{}: {e}", cfg.gallery_error_prefix));
            return Err(e);
        }
    };

    let gallery = Gallery::new(manifest, cfg.cdn_base.clone());
    host.show_cards(&gallery.cards())?;
    tracing::debug!(
        categories = gallery.manifest().categories().len(),
        "gallery ready"
    );
    Ok(gallery)
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/view.rs"]
mod tests;

use crate::foundation::error::{PapillonError, PapillonResult};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// One gallery category and its media files, in manifest order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Category {
    /// Category name (manifest key).
    pub name: String,
    /// Media paths, relative to the CDN base or absolute URLs.
    pub files: Vec<String>,
}

impl Category {
    /// File used as the category's card image.
    pub fn preview(&self) -> Option<&str> {
        preview_file(&self.files)
    }
}

/// Static gallery manifest: `{ "<category>": ["file1.jpg", ...], ... }`.
///
/// Category order follows the JSON document. A repeated key replaces the earlier file
/// list in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Manifest {
    categories: Vec<Category>,
}

impl Manifest {
    /// Parse manifest JSON.
    pub fn from_json(s: &str) -> PapillonResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PapillonError::manifest(format!("parse manifest JSON: {e}")))
    }

    /// Categories in manifest order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn insert(&mut self, name: String, files: Vec<String>) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.files = files,
            None => self.categories.push(Category { name, files }),
        }
    }
}

struct ManifestVisitor;

impl<'de> Visitor<'de> for ManifestVisitor {
    type Value = Manifest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category name to a list of media file names")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut manifest = Manifest::default();
        while let Some((name, files)) = map.next_entry::<String, Vec<String>>()? {
            manifest.insert(name, files);
        }
        Ok(manifest)
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ManifestVisitor)
    }
}

/// Kind of media a file renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video with playback controls.
    Video,
}

impl MediaKind {
    /// `.mp4` and `.webm` files are videos; everything else is an image.
    pub fn of(file: &str) -> Self {
        if file.ends_with(".mp4") || file.ends_with(".webm") {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// `true` for names ending in `1.` plus a 3-4 letter extension (`cat1.jpg`, `x01.jpeg`).
pub fn is_preview_name(file: &str) -> bool {
    let Some((stem, ext)) = file.rsplit_once('.') else {
        return false;
    };
    (3..=4).contains(&ext.len())
        && ext.bytes().all(|b| b.is_ascii_alphabetic())
        && stem.ends_with('1')
}

/// First preview-named file, falling back to the first file.
pub fn preview_file(files: &[String]) -> Option<&str> {
    files
        .iter()
        .find(|f| is_preview_name(f))
        .or_else(|| files.first())
        .map(String::as_str)
}

/// Clean a relative media path: forward slashes, no empty or `.` parts, no `..`.
pub fn normalize_rel_path(source: &str) -> PapillonResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(PapillonError::validation("media paths must be relative"));
    }
    if s.is_empty() {
        return Err(PapillonError::validation("media path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(PapillonError::validation(
                "media paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(PapillonError::validation(
            "media path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

/// Resolve a manifest entry against the CDN base. Absolute URLs pass through unchanged.
pub fn resolve_url(cdn_base: &str, file: &str) -> String {
    if file.starts_with("http://") || file.starts_with("https://") || file.starts_with("//") {
        return file.to_string();
    }
    format!("{cdn_base}{file}")
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/manifest.rs"]
mod tests;

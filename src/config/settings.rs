use crate::animation::ease::Ease;
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::render::surface::PointStyle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Top-level configuration: the morph scene plus the landing/gallery flow around it.
///
/// Every field has a default matching the stock butterfly landing page, so an empty JSON
/// object `{}` is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Particle morph parameters.
    pub morph: MorphConfig,
    /// Landing page and gallery parameters.
    pub landing: LandingConfig,
}

impl AppConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PapillonResult<Self> {
        let cfg: AppConfig = serde_json::from_reader(r)
            .map_err(|e| PapillonError::serde(format!("parse config JSON: {e}")))?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PapillonResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PapillonError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every numeric parameter for a usable range.
    pub fn validate(&self) -> PapillonResult<()> {
        self.morph.validate()?;
        self.landing.validate()
    }
}

/// Parameters of the particle morph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Number of particles (N).
    pub particle_count: usize,
    /// Morph duration in milliseconds.
    pub duration_ms: f64,
    /// Easing applied to normalized progress.
    pub ease: Ease,
    /// Full width of the random initial cloud along x, y, z.
    pub initial_extent: [f32; 3],
    /// Planar jitter range; offsets fall in `[-variance/2, variance/2]`.
    pub variance: f32,
    /// Amplitude of the `sin(i)` depth oscillation.
    pub depth_scale: f32,
    /// Full range of the depth jitter.
    pub depth_jitter: f32,
    /// Per-frame y rotation at progress 0, in radians.
    pub spin_y: f32,
    /// Per-frame amplitude of the x wobble, in radians.
    pub spin_x: f32,
    /// Period divisor of the x wobble, in milliseconds.
    pub wobble_period_ms: f64,
    /// Minimum progress before the landing can be left.
    pub enter_threshold: f64,
    /// Viewing camera.
    pub camera: CameraConfig,
    /// Point appearance.
    pub style: PointStyle,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: 4000,
            duration_ms: 5000.0,
            ease: Ease::OutQuart,
            initial_extent: [2000.0, 1500.0, 800.0],
            variance: 15.0,
            depth_scale: 20.0,
            depth_jitter: 40.0,
            spin_y: 0.002,
            spin_x: 0.0005,
            wobble_period_ms: 3000.0,
            enter_threshold: 0.9,
            camera: CameraConfig::default(),
            style: PointStyle::default(),
        }
    }
}

impl MorphConfig {
    /// Validate morph parameters.
    pub fn validate(&self) -> PapillonResult<()> {
        if self.particle_count == 0 {
            return Err(PapillonError::validation("particle_count must be > 0"));
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(PapillonError::validation(
                "duration_ms must be finite and > 0",
            ));
        }
        if self
            .initial_extent
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(PapillonError::validation(
                "initial_extent components must be finite and >= 0",
            ));
        }
        for (name, v) in [
            ("variance", self.variance),
            ("depth_scale", self.depth_scale),
            ("depth_jitter", self.depth_jitter),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(PapillonError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, v) in [("spin_x", self.spin_x), ("spin_y", self.spin_y)] {
            if !v.is_finite() {
                return Err(PapillonError::validation(format!("{name} must be finite")));
            }
        }
        if !self.wobble_period_ms.is_finite() || self.wobble_period_ms <= 0.0 {
            return Err(PapillonError::validation(
                "wobble_period_ms must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.enter_threshold) {
            return Err(PapillonError::validation(
                "enter_threshold must be within [0, 1]",
            ));
        }
        self.camera.validate()?;
        self.style.validate()
    }
}

/// Perspective camera placed on the +z axis, looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Distance from the origin along +z.
    pub distance: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            distance: 600.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

impl CameraConfig {
    /// Validate camera parameters.
    pub fn validate(&self) -> PapillonResult<()> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(PapillonError::validation(
                "camera fov_deg must be within (0, 180)",
            ));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(PapillonError::validation(
                "camera clip planes must satisfy 0 < near < far",
            ));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(PapillonError::validation(
                "camera distance must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Landing page, readiness wait and gallery parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Base URL prepended to relative manifest and media paths.
    pub cdn_base: String,
    /// Manifest file name relative to `cdn_base`.
    pub manifest_name: String,
    /// How long to wait for the graphics dependency, in milliseconds.
    pub readiness_timeout_ms: u64,
    /// Interval between readiness probes, in milliseconds.
    pub readiness_poll_ms: u64,
    /// Call-to-action text shown when the graphics dependency never arrives.
    pub dependency_fallback_text: String,
    /// Prefix of the text shown in the gallery container when the manifest fails.
    pub gallery_error_prefix: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            cdn_base: "https://raw.githubusercontent.com/kangyudeng/butterfly-gallery/main/"
                .to_string(),
            manifest_name: "images.json".to_string(),
            readiness_timeout_ms: 8000,
            readiness_poll_ms: 100,
            dependency_fallback_text: "Failed to load, please refresh the page".to_string(),
            gallery_error_prefix: "Unable to load image list".to_string(),
        }
    }
}

impl LandingConfig {
    /// Validate landing parameters.
    pub fn validate(&self) -> PapillonResult<()> {
        if self.manifest_name.trim().is_empty() {
            return Err(PapillonError::validation("manifest_name must be non-empty"));
        }
        if self.readiness_timeout_ms == 0 {
            return Err(PapillonError::validation("readiness_timeout_ms must be > 0"));
        }
        if self.readiness_poll_ms == 0 {
            return Err(PapillonError::validation("readiness_poll_ms must be > 0"));
        }
        Ok(())
    }

    /// Absolute URL of the manifest.
    pub fn manifest_url(&self) -> String {
        format!("{}{}", self.cdn_base, self.manifest_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;

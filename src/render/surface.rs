use crate::animation::animator::Spin;
use crate::foundation::core::{Rgba8, Vec3, Viewport};
use crate::foundation::error::{PapillonError, PapillonResult};

/// Appearance of the rendered point cloud.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointStyle {
    /// Point colour as `0xRRGGBB`.
    pub color: u32,
    /// Point size in world units at unit distance scale.
    pub size: f32,
    /// Point opacity in `[0, 1]`.
    pub opacity: f32,
    /// Background colour as `0xRRGGBB`.
    pub clear_color: u32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: 0xffd166,
            size: 2.5,
            opacity: 0.95,
            clear_color: 0x0b0b0c,
        }
    }
}

impl PointStyle {
    /// Validate style values.
    pub fn validate(&self) -> PapillonResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PapillonError::validation("point size must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(PapillonError::validation(
                "point opacity must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Point paint including opacity.
    pub fn paint(&self) -> Rgba8 {
        Rgba8::from_hex(self.color).with_opacity(self.opacity)
    }

    /// Opaque background colour.
    pub fn background(&self) -> Rgba8 {
        Rgba8::from_hex(self.clear_color)
    }

    /// Point paint flattened onto the background, as drawn by opaque surfaces.
    pub fn opaque_paint(&self) -> Rgba8 {
        self.paint().over_opaque(self.background())
    }
}

/// One frame's worth of points handed to a surface.
#[derive(Clone, Copy, Debug)]
pub struct PointCloud<'a> {
    /// Particle positions in world space.
    pub positions: &'a [Vec3],
    /// Cosmetic rotation applied to the whole cloud.
    pub spin: Spin,
    /// Appearance.
    pub style: &'a PointStyle,
}

/// The host's drawing capabilities as seen by the morph animator.
///
/// Scene and camera setup happen when the surface is constructed; the animator only needs
/// to know that frames can be scheduled and to submit one point cloud per tick.
pub trait RenderSurface {
    /// `true` when the host can deliver per-frame callbacks (i.e. a rendering context exists).
    fn frame_scheduling_available(&self) -> bool;

    /// Resize the drawing area.
    fn set_viewport(&mut self, viewport: Viewport) -> PapillonResult<()>;

    /// Draw `cloud` as the current frame.
    fn submit_points(&mut self, cloud: &PointCloud<'_>) -> PapillonResult<()>;
}

/// In-memory surface that records what it was asked to draw.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    available: bool,
    viewport: Option<Viewport>,
    submits: usize,
    last_positions: Vec<Vec3>,
    last_spin: Option<Spin>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// A surface with frame scheduling available.
    pub fn new() -> Self {
        Self {
            available: true,
            viewport: None,
            submits: 0,
            last_positions: Vec::new(),
            last_spin: None,
        }
    }

    /// A surface whose host has no rendering context.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Number of `submit_points` calls so far.
    pub fn submits(&self) -> usize {
        self.submits
    }

    /// Positions from the last submit.
    pub fn last_positions(&self) -> &[Vec3] {
        &self.last_positions
    }

    /// Spin from the last submit.
    pub fn last_spin(&self) -> Option<Spin> {
        self.last_spin
    }

    /// Viewport from the last resize.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl RenderSurface for RecordingSurface {
    fn frame_scheduling_available(&self) -> bool {
        self.available
    }

    fn set_viewport(&mut self, viewport: Viewport) -> PapillonResult<()> {
        self.viewport = Some(viewport);
        Ok(())
    }

    fn submit_points(&mut self, cloud: &PointCloud<'_>) -> PapillonResult<()> {
        self.submits += 1;
        self.last_positions.clear();
        self.last_positions.extend_from_slice(cloud.positions);
        self.last_spin = Some(cloud.spin);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

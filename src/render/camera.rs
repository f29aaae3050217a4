use crate::animation::animator::Spin;
use crate::config::settings::CameraConfig;
use crate::foundation::core::{Vec3, Viewport};
use glam::{EulerRot, Mat4};

/// A point projected into viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Horizontal pixel coordinate (0 = left edge).
    pub x: f32,
    /// Vertical pixel coordinate (0 = top edge).
    pub y: f32,
    /// Distance from the camera along its view axis.
    pub depth: f32,
}

/// Perspective camera on the +z axis looking at the origin, y up.
#[derive(Clone, Copy, Debug)]
pub struct PerspectiveCamera {
    cfg: CameraConfig,
    viewport: Viewport,
    view_proj: Mat4,
}

impl PerspectiveCamera {
    /// Camera sized for `viewport`.
    pub fn new(cfg: CameraConfig, viewport: Viewport) -> Self {
        let mut cam = Self {
            cfg,
            viewport,
            view_proj: Mat4::IDENTITY,
        };
        cam.resize(viewport);
        cam
    }

    /// Update the aspect ratio and rebuild the projection.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let proj = Mat4::perspective_rh_gl(
            self.cfg.fov_deg.to_radians(),
            viewport.aspect(),
            self.cfg.near,
            self.cfg.far,
        );
        let view = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, self.cfg.distance),
            Vec3::ZERO,
            Vec3::Y,
        );
        self.view_proj = proj * view;
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Project a world-space point after applying the cloud rotation.
    ///
    /// Points behind the camera or outside the clip depth range yield `None`.
    pub fn project(&self, p: Vec3, spin: Spin) -> Option<ProjectedPoint> {
        let model = Mat4::from_euler(EulerRot::XYZ, spin.x, spin.y, 0.0);
        let clip = (self.view_proj * model) * p.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let w = self.viewport.width as f32;
        let h = self.viewport.height as f32;
        Some(ProjectedPoint {
            x: (ndc.x + 1.0) * 0.5 * w,
            y: (1.0 - ndc.y) * 0.5 * h,
            depth: clip.w,
        })
    }

    /// On-screen diameter of a point of world `size` seen at `depth`.
    pub fn point_size_px(&self, size: f32, depth: f32) -> f32 {
        let scale = self.viewport.height as f32 * 0.5;
        size * scale / depth.max(self.cfg.near)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;

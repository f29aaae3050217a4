use crate::config::settings::CameraConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::render::camera::PerspectiveCamera;
use crate::render::surface::{PointCloud, RenderSurface};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Software point-cloud surface powered by `vello_cpu`.
///
/// Each submit clears to the style's opaque background and draws every visible particle as
/// a square sized by perspective attenuation, in the style's paint flattened onto that
/// background. Frames are always fully opaque.
pub struct CpuPointSurface {
    camera: PerspectiveCamera,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: vello_cpu::Pixmap,
    frame: Option<FrameRGBA>,
}

impl CpuPointSurface {
    /// Create a surface with its own camera.
    pub fn new(camera: CameraConfig, viewport: Viewport) -> PapillonResult<Self> {
        let (width, height) = pixmap_dims(viewport)?;
        Ok(Self {
            camera: PerspectiveCamera::new(camera, viewport),
            width,
            height,
            ctx: None,
            pixmap: vello_cpu::Pixmap::new(width, height),
            frame: None,
        })
    }

    /// The last rendered frame, if any.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    /// The surface camera.
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn take_ctx(&mut self) -> vello_cpu::RenderContext {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == self.width && ctx.height() == self.height => ctx,
            _ => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        ctx
    }
}

fn pixmap_dims(viewport: Viewport) -> PapillonResult<(u16, u16)> {
    let w = u16::try_from(viewport.width)
        .map_err(|_| PapillonError::render("viewport width exceeds u16"))?;
    let h = u16::try_from(viewport.height)
        .map_err(|_| PapillonError::render("viewport height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(PapillonError::render("viewport must be non-empty"));
    }
    Ok((w, h))
}

impl RenderSurface for CpuPointSurface {
    fn frame_scheduling_available(&self) -> bool {
        true
    }

    fn set_viewport(&mut self, viewport: Viewport) -> PapillonResult<()> {
        let (width, height) = pixmap_dims(viewport)?;
        self.camera.resize(viewport);
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.pixmap = vello_cpu::Pixmap::new(width, height);
            self.frame = None;
        }
        Ok(())
    }

    fn submit_points(&mut self, cloud: &PointCloud<'_>) -> PapillonResult<()> {
        let mut ctx = self.take_ctx();
        let (w, h) = (f64::from(self.width), f64::from(self.height));

        let bg = cloud.style.background();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));

        let paint = cloud.style.opaque_paint();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            paint.r, paint.g, paint.b, 255,
        ));
        let mut drawn = 0usize;
        for p in cloud.positions {
            let Some(pp) = self.camera.project(*p, cloud.spin) else {
                continue;
            };
            let size_px = self.camera.point_size_px(cloud.style.size, pp.depth).max(1.0);
            let r = f64::from(size_px) * 0.5;
            let (x, y) = (f64::from(pp.x), f64::from(pp.y));
            if x + r < 0.0 || y + r < 0.0 || x - r > w || y - r > h {
                continue;
            }
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x - r, y - r, x + r, y + r));
            drawn += 1;
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx = Some(ctx);

        let mut data = self.pixmap.data_as_u8_slice().to_vec();
        // Cleared to an opaque background; pin alpha against rounding at coverage edges.
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        self.frame = Some(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: true,
        });
        tracing::trace!(drawn, total = cloud.positions.len(), "cpu frame rendered");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

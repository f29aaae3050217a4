use super::*;
use crate::animation::animator::Spin;
use crate::foundation::core::Vec3;
use crate::render::surface::PointStyle;

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn empty_cloud_clears_to_background() {
    let mut s = CpuPointSurface::new(CameraConfig::default(), Viewport::new(32, 24).unwrap())
        .unwrap();
    let style = PointStyle::default();
    s.submit_points(&PointCloud {
        positions: &[],
        spin: Spin::default(),
        style: &style,
    })
    .unwrap();
    let f = s.frame().unwrap();
    assert_eq!((f.width, f.height, f.data.len()), (32, 24, 32 * 24 * 4));
    assert_eq!(pixel(f, 5, 5), [0x0b, 0x0b, 0x0c, 255]);
}

#[test]
fn centred_particle_lights_centre_pixel() {
    let mut s = CpuPointSurface::new(CameraConfig::default(), Viewport::new(64, 64).unwrap())
        .unwrap();
    let style = PointStyle {
        size: 40.0,
        opacity: 1.0,
        ..PointStyle::default()
    };
    s.submit_points(&PointCloud {
        positions: &[Vec3::ZERO],
        spin: Spin::default(),
        style: &style,
    })
    .unwrap();
    let f = s.frame().unwrap();
    let c = pixel(f, 32, 32);
    assert_eq!(c[3], 255);
    assert!(c[0] > 200 && c[2] < 150, "{c:?}");
    assert_eq!(pixel(f, 1, 1), [0x0b, 0x0b, 0x0c, 255]);
}

#[test]
fn resize_reallocates_frame() {
    let mut s = CpuPointSurface::new(CameraConfig::default(), Viewport::new(16, 16).unwrap())
        .unwrap();
    s.set_viewport(Viewport::new(40, 20).unwrap()).unwrap();
    let style = PointStyle::default();
    s.submit_points(&PointCloud {
        positions: &[Vec3::ZERO],
        spin: Spin::default(),
        style: &style,
    })
    .unwrap();
    let f = s.frame().unwrap();
    assert_eq!((f.width, f.height), (40, 20));
}

#[test]
fn oversized_viewport_is_rejected() {
    let vp = Viewport::new(70_000, 10).unwrap();
    assert!(CpuPointSurface::new(CameraConfig::default(), vp).is_err());
}

#[test]
fn overlapping_translucent_points_keep_frame_opaque() {
    let mut s = CpuPointSurface::new(CameraConfig::default(), Viewport::new(32, 32).unwrap())
        .unwrap();
    let style = PointStyle {
        size: 400.0,
        ..PointStyle::default()
    };
    assert!(style.opacity < 1.0);
    let pts = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
    s.submit_points(&PointCloud {
        positions: &pts,
        spin: Spin::default(),
        style: &style,
    })
    .unwrap();
    let f = s.frame().unwrap();
    let min_alpha = f.data.chunks_exact(4).map(|px| px[3]).min().unwrap();
    assert_eq!(min_alpha, 255);

    let want = style.opaque_paint();
    assert_eq!(pixel(f, 16, 16), [want.r, want.g, want.b, 255]);
}

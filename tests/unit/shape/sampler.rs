use super::*;
use crate::shape::butterfly::butterfly_anchors;
use crate::shape::outline::{CurveMapping, PathCurve};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn no_jitter() -> SampleOpts {
    SampleOpts {
        variance: 0.0,
        depth_scale: 0.0,
        depth_jitter: 0.0,
    }
}

#[test]
fn returns_exactly_n_samples() {
    let outline = Outline::anchors(butterfly_anchors());
    for n in [1, 2, 31, 100, 4000] {
        let pts = sample(&outline, n, &SampleOpts::default(), &mut rng()).unwrap();
        assert_eq!(pts.len(), n);
    }
}

#[test]
fn unit_square_gets_one_sample_per_corner() {
    let corners = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let idx: Vec<usize> = (0..4).map(|i| anchor_index(i, 4, corners.len())).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);

    let outline = Outline::anchors(corners.clone());
    let pts = sample(&outline, 4, &no_jitter(), &mut rng()).unwrap();
    for (p, c) in pts.iter().zip(&corners) {
        assert_eq!((p.x, p.y, p.z), (c.x as f32, c.y as f32, 0.0));
    }
}

#[test]
fn anchor_index_clamps_to_last() {
    assert_eq!(anchor_index(9, 10, 3), 2);
    assert_eq!(anchor_index(0, 10, 3), 0);
    assert_eq!(anchor_index(4, 10, 3), 1);
}

#[test]
fn jitter_stays_inside_bounding_box() {
    let opts = SampleOpts::default();
    let outline = Outline::anchors(butterfly_anchors());
    let pts = sample(&outline, 4000, &opts, &mut rng()).unwrap();
    let half = opts.variance / 2.0;
    let zmax = opts.depth_scale + opts.depth_jitter / 2.0;
    for p in &pts {
        assert!(p.x.abs() <= 240.0 + half);
        assert!(p.y.abs() <= 120.0 + half);
        assert!(p.z.abs() <= zmax);
    }
}

#[test]
fn jitter_is_actually_applied() {
    let outline = Outline::anchors(vec![Point::new(5.0, 5.0)]);
    let pts = sample(&outline, 500, &SampleOpts::default(), &mut rng()).unwrap();
    let distinct_x = pts.iter().filter(|p| p.x != 5.0).count();
    assert!(distinct_x > 400);
    let mean_x = pts.iter().map(|p| p.x).sum::<f32>() / pts.len() as f32;
    assert!((mean_x - 5.0).abs() < 1.5);
}

#[test]
fn depth_follows_sine_of_index() {
    let opts = SampleOpts {
        depth_scale: 20.0,
        ..no_jitter()
    };
    let outline = Outline::anchors(vec![Point::ORIGIN]);
    let pts = sample(&outline, 8, &opts, &mut rng()).unwrap();
    for (i, p) in pts.iter().enumerate() {
        assert!((p.z - (i as f32).sin() * 20.0).abs() < 1e-5);
    }
}

#[test]
fn curve_samples_are_even_in_arc_length() {
    let curve = PathCurve::from_svg("M0 0 L100 0").unwrap();
    let outline = Outline::curve(curve, CurveMapping::default());
    let pts = sample(&outline, 4, &no_jitter(), &mut rng()).unwrap();
    let xs: Vec<f32> = pts.iter().map(|p| p.x).collect();
    for (x, want) in xs.iter().zip([0.0, 25.0, 50.0, 75.0]) {
        assert!((x - want).abs() < 0.05, "{x} vs {want}");
    }
}

#[test]
fn curve_samples_are_mapped_into_animator_space() {
    let curve = PathCurve::from_svg("M10 10 L10 30").unwrap();
    let mapping = CurveMapping {
        origin: crate::foundation::core::Vec2::new(10.0, 10.0),
        scale: 3.0,
        flip_y: true,
    };
    let outline = Outline::curve(curve, mapping);
    let pts = sample(&outline, 2, &no_jitter(), &mut rng()).unwrap();
    assert!(pts[0].x.abs() < 1e-3 && pts[0].y.abs() < 1e-3);
    assert!(pts[1].x.abs() < 1e-3 && (pts[1].y + 30.0).abs() < 0.05);
}

#[test]
fn preconditions_fail_fast() {
    let outline = Outline::anchors(butterfly_anchors());
    assert!(sample(&outline, 0, &SampleOpts::default(), &mut rng()).is_err());
    let empty = Outline::anchors(Vec::new());
    assert!(sample(&empty, 10, &SampleOpts::default(), &mut rng()).is_err());
}

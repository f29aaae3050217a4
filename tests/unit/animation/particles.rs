use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn set(n: usize) -> ParticleSet {
    let mut rng = StdRng::seed_from_u64(3);
    let initial = ParticleSet::scatter(n, [2000.0, 1500.0, 800.0], &mut rng);
    let target = ParticleSet::scatter(n, [480.0, 240.0, 80.0], &mut rng);
    ParticleSet::new(initial, target).unwrap()
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Vec3::new(0.1, -713.25, 1e-3);
    let b = Vec3::new(-220.7, 50.3, 19.99);
    assert_eq!(<Vec3 as Lerp>::lerp(&a, &b, 0.0), a);
    assert_eq!(<Vec3 as Lerp>::lerp(&a, &b, 1.0), b);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 0.5), 3.0);
}

#[test]
fn interpolate_hits_initial_and_target_exactly() {
    let mut p = set(2000);
    p.interpolate(0.0);
    assert_eq!(p.current(), p.initial());
    p.interpolate(1.0);
    assert_eq!(p.current(), p.target());
}

#[test]
fn interpolate_midway_is_between_endpoints() {
    let mut p = set(64);
    p.interpolate(0.5);
    for ((c, a), b) in p.current().iter().zip(p.initial()).zip(p.target()) {
        let mid = (*a + *b) * 0.5;
        assert!((*c - mid).length() < 1e-3);
    }
}

#[test]
fn scatter_respects_extent() {
    let mut rng = StdRng::seed_from_u64(11);
    let pts = ParticleSet::scatter(1000, [2000.0, 1500.0, 800.0], &mut rng);
    assert_eq!(pts.len(), 1000);
    for p in pts {
        assert!(p.x.abs() <= 1000.0 && p.y.abs() <= 750.0 && p.z.abs() <= 400.0);
    }
}

#[test]
fn mismatched_or_empty_buffers_are_rejected() {
    assert!(ParticleSet::new(Vec::new(), Vec::new()).is_err());
    assert!(ParticleSet::new(vec![Vec3::ZERO; 2], vec![Vec3::ZERO; 3]).is_err());
    let p = ParticleSet::new(vec![Vec3::ZERO; 3], vec![Vec3::ONE; 3]).unwrap();
    assert_eq!(p.len(), 3);
    assert!(!p.is_empty());
}

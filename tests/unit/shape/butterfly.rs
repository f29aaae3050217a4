use super::*;

#[test]
fn anchors_are_left_right_balanced() {
    let anchors = butterfly_anchors();
    assert_eq!(anchors.len(), 31);
    let left = anchors.iter().filter(|p| p.x < 0.0).count();
    let right = anchors.iter().filter(|p| p.x > 0.0).count();
    assert_eq!(left, right);
}

#[test]
fn anchors_fit_wing_span() {
    for p in butterfly_anchors() {
        assert!(p.x.abs() <= 240.0);
        assert!(p.y.abs() <= 120.0);
    }
}

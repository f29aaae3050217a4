use crate::foundation::core::Point;

/// Hand-authored butterfly landmarks in animator space (y up), ordered wing by wing.
const BUTTERFLY_ANCHORS: [(f64, f64); 31] = [
    // left wing, upper lobe
    (-150.0, 100.0),
    (-200.0, 80.0),
    (-220.0, 50.0),
    (-200.0, 30.0),
    (-100.0, 20.0),
    (-80.0, 0.0),
    (-100.0, -30.0),
    // left wing, lower lobe
    (-180.0, -50.0),
    (-240.0, -80.0),
    (-220.0, -120.0),
    (-150.0, -100.0),
    // body
    (-20.0, 80.0),
    (0.0, 100.0),
    (20.0, 80.0),
    (-10.0, 0.0),
    (0.0, 0.0),
    (10.0, 0.0),
    (-20.0, -80.0),
    (0.0, -100.0),
    (20.0, -80.0),
    // right wing, upper lobe
    (100.0, 20.0),
    (80.0, 0.0),
    (100.0, -30.0),
    (200.0, 30.0),
    (220.0, 50.0),
    (200.0, 80.0),
    (150.0, 100.0),
    // right wing, lower lobe
    (180.0, -50.0),
    (150.0, -100.0),
    (220.0, -120.0),
    (240.0, -80.0),
];

/// The stock butterfly silhouette as an ordered anchor list.
pub fn butterfly_anchors() -> Vec<Point> {
    BUTTERFLY_ANCHORS
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/butterfly.rs"]
mod tests;

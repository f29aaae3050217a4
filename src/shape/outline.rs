use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::{PapillonError, PapillonResult};
use kurbo::{Affine, ParamCurve, ParamCurveArclen, PathSeg, Rect, Shape};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// A continuous curve that can be queried by cumulative arc length.
pub trait ArcLengthCurve {
    /// Total arc length of the curve.
    fn length(&self) -> f64;
    /// Point at arc length `s`, with `s` in `[0, length()]`.
    fn point_at_length(&self, s: f64) -> Point;
}

/// Arc-length-queryable wrapper around a [`BezPath`].
///
/// Segment lengths are measured once at construction; lookups binary-search the cumulative
/// table and invert arc length inside the hit segment.
#[derive(Clone, Debug)]
pub struct PathCurve {
    segments: Vec<PathSeg>,
    ends: Vec<f64>, // cumulative length at the end of each segment
    bounds: Rect,
}

impl PathCurve {
    /// Measure `path`. Paths with no measurable length are rejected.
    pub fn new(path: &BezPath) -> PapillonResult<Self> {
        let mut segments = Vec::new();
        let mut ends = Vec::new();
        let mut total = 0.0;
        for seg in path.segments() {
            let len = seg.arclen(ARCLEN_ACCURACY);
            if !len.is_finite() || len <= 0.0 {
                continue;
            }
            total += len;
            segments.push(seg);
            ends.push(total);
        }
        if segments.is_empty() {
            return Err(PapillonError::sampling(
                "curve outline must have a length > 0",
            ));
        }
        Ok(Self {
            segments,
            ends,
            bounds: path.bounding_box(),
        })
    }

    /// Parse SVG path data (the `d` attribute) and measure it.
    pub fn from_svg(d: &str) -> PapillonResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| PapillonError::sampling(format!("parse SVG path data: {e}")))?;
        Self::new(&path)
    }

    /// Axis-aligned bounds of the source path.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl ArcLengthCurve for PathCurve {
    fn length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, s: f64) -> Point {
        let s = s.clamp(0.0, self.length());
        let idx = self
            .ends
            .partition_point(|&end| end <= s)
            .min(self.segments.len() - 1);
        let start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let seg = self.segments[idx];
        let t = seg.inv_arclen(s - start, ARCLEN_ACCURACY);
        seg.eval(t)
    }
}

/// Affine map from curve space into animator space.
///
/// Curve space is translated so `origin` lands on zero, uniformly scaled, then mirrored
/// vertically when `flip_y` is set (SVG is y-down, the animator is y-up).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveMapping {
    /// Curve-space point mapped to the animator origin.
    pub origin: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Invert the vertical axis.
    pub flip_y: bool,
}

impl Default for CurveMapping {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
            flip_y: false,
        }
    }
}

impl CurveMapping {
    /// Mapping that centres `bounds` on the origin and scales its width to `target_width`.
    pub fn centered(bounds: Rect, target_width: f64, flip_y: bool) -> Self {
        let scale = if bounds.width() > 0.0 {
            target_width / bounds.width()
        } else {
            1.0
        };
        Self {
            origin: bounds.center().to_vec2(),
            scale,
            flip_y,
        }
    }

    /// The mapping as a kurbo affine.
    pub fn affine(&self) -> Affine {
        let sy = if self.flip_y { -self.scale } else { self.scale };
        Affine::scale_non_uniform(self.scale, sy) * Affine::translate(-self.origin)
    }

    /// Map a curve-space point into animator space.
    pub fn apply(&self, p: Point) -> Point {
        self.affine() * p
    }
}

/// Target silhouette descriptor.
pub enum Outline {
    /// Ordered landmark points, sampled by proportional index.
    Anchors(Vec<Point>),
    /// Continuous curve, sampled at even arc-length intervals.
    Curve {
        /// The curve to sample.
        curve: Box<dyn ArcLengthCurve + Send + Sync>,
        /// Map from curve space into animator space.
        mapping: CurveMapping,
    },
}

impl Outline {
    /// Anchor-list outline.
    pub fn anchors(points: impl Into<Vec<Point>>) -> Self {
        Self::Anchors(points.into())
    }

    /// Curve outline.
    pub fn curve(
        curve: impl ArcLengthCurve + Send + Sync + 'static,
        mapping: CurveMapping,
    ) -> Self {
        Self::Curve {
            curve: Box::new(curve),
            mapping,
        }
    }

    /// Fail fast on outlines that cannot produce samples.
    pub fn validate(&self) -> PapillonResult<()> {
        match self {
            Self::Anchors(points) => {
                if points.is_empty() {
                    return Err(PapillonError::sampling(
                        "anchor outline must have at least one point",
                    ));
                }
            }
            Self::Curve { curve, mapping } => {
                let len = curve.length();
                if !len.is_finite() || len <= 0.0 {
                    return Err(PapillonError::sampling(
                        "curve outline must have a length > 0",
                    ));
                }
                if !mapping.scale.is_finite() || mapping.scale == 0.0 {
                    return Err(PapillonError::sampling(
                        "curve mapping scale must be finite and non-zero",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Outline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anchors(points) => f.debug_tuple("Anchors").field(&points.len()).finish(),
            Self::Curve { curve, mapping } => f
                .debug_struct("Curve")
                .field("length", &curve.length())
                .field("mapping", mapping)
                .finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/outline.rs"]
mod tests;

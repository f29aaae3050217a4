use crate::config::settings::MorphConfig;
use crate::foundation::core::{Point, Vec3};
use crate::foundation::error::{PapillonError, PapillonResult};
use crate::shape::outline::Outline;
use rand::Rng;

/// Perturbation applied to every sampled target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleOpts {
    /// Full range of the planar jitter; offsets fall in `[-variance/2, variance/2]`.
    pub variance: f32,
    /// Amplitude of the `sin(i)` depth term.
    pub depth_scale: f32,
    /// Full range of the depth jitter.
    pub depth_jitter: f32,
}

impl Default for SampleOpts {
    fn default() -> Self {
        Self {
            variance: 15.0,
            depth_scale: 20.0,
            depth_jitter: 40.0,
        }
    }
}

impl From<&MorphConfig> for SampleOpts {
    fn from(cfg: &MorphConfig) -> Self {
        Self {
            variance: cfg.variance,
            depth_scale: cfg.depth_scale,
            depth_jitter: cfg.depth_jitter,
        }
    }
}

/// Index of the anchor covering sample `i` of `n`: `floor(i / n * len)`, clamped.
pub fn anchor_index(i: usize, n: usize, len: usize) -> usize {
    debug_assert!(n > 0 && len > 0);
    (i * len / n).min(len - 1)
}

/// Produce `n` jittered 3D targets approximating `outline`.
///
/// Anchor outlines pick the proportional anchor for each index; curve outlines are walked at
/// `n` evenly spaced arc lengths and mapped into animator space. Depth is `sin(i) *
/// depth_scale` plus jitter.
#[tracing::instrument(skip(outline, opts, rng))]
pub fn sample<R: Rng + ?Sized>(
    outline: &Outline,
    n: usize,
    opts: &SampleOpts,
    rng: &mut R,
) -> PapillonResult<Vec<Vec3>> {
    if n == 0 {
        return Err(PapillonError::sampling("sample count must be > 0"));
    }
    outline.validate()?;

    let base: Vec<Point> = match outline {
        Outline::Anchors(anchors) => (0..n)
            .map(|i| anchors[anchor_index(i, n, anchors.len())])
            .collect(),
        Outline::Curve { curve, mapping } => {
            let total = curve.length();
            (0..n)
                .map(|i| {
                    let s = (i as f64 / n as f64) * total % total;
                    mapping.apply(curve.point_at_length(s))
                })
                .collect()
        }
    };

    let out = base
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let x = p.x as f32 + (rng.r#gen::<f32>() - 0.5) * opts.variance;
            let y = p.y as f32 + (rng.r#gen::<f32>() - 0.5) * opts.variance;
            let z = (rng.r#gen::<f32>() - 0.5) * opts.depth_jitter
                + (i as f32).sin() * opts.depth_scale;
            Vec3::new(x, y, z)
        })
        .collect::<Vec<_>>();

    tracing::debug!(samples = out.len(), "sampled outline");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/sampler.rs"]
mod tests;

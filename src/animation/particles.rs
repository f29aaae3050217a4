use crate::foundation::core::Vec3;
use crate::foundation::error::{PapillonError, PapillonResult};
use rand::Rng;

/// Linear interpolation between two values.
///
/// Implementations use the `a * (1 - t) + b * t` form, which reproduces `a` at `t = 0` and
/// `b` at `t = 1` bit-for-bit.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let t = t as f32;
        a * (1.0 - t) + b * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec3::new(
            <f32 as Lerp>::lerp(&a.x, &b.x, t),
            <f32 as Lerp>::lerp(&a.y, &b.y, t),
            <f32 as Lerp>::lerp(&a.z, &b.z, t),
        )
    }
}

/// Three parallel particle buffers of equal length.
///
/// `initial` and `target` are fixed at construction; `current` is rewritten by
/// [`ParticleSet::interpolate`].
#[derive(Clone, Debug)]
pub struct ParticleSet {
    initial: Vec<Vec3>,
    target: Vec<Vec3>,
    current: Vec<Vec3>,
}

impl ParticleSet {
    /// Pair start and target positions. Both must be non-empty and of equal length.
    pub fn new(initial: Vec<Vec3>, target: Vec<Vec3>) -> PapillonResult<Self> {
        if initial.is_empty() {
            return Err(PapillonError::validation(
                "particle set must hold at least one particle",
            ));
        }
        if initial.len() != target.len() {
            return Err(PapillonError::validation(format!(
                "initial/target length mismatch: {} vs {}",
                initial.len(),
                target.len()
            )));
        }
        let current = initial.clone();
        Ok(Self {
            initial,
            target,
            current,
        })
    }

    /// Random cloud of `n` points, uniform in a box of full size `extent` centred on zero.
    pub fn scatter<R: Rng + ?Sized>(n: usize, extent: [f32; 3], rng: &mut R) -> Vec<Vec3> {
        (0..n)
            .map(|_| {
                Vec3::new(
                    (rng.r#gen::<f32>() - 0.5) * extent[0],
                    (rng.r#gen::<f32>() - 0.5) * extent[1],
                    (rng.r#gen::<f32>() - 0.5) * extent[2],
                )
            })
            .collect()
    }

    /// Number of particles (N).
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Start positions.
    pub fn initial(&self) -> &[Vec3] {
        &self.initial
    }

    /// Target positions.
    pub fn target(&self) -> &[Vec3] {
        &self.target
    }

    /// Positions as of the last interpolation.
    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    /// Set every current position to `lerp(initial, target, t)`.
    pub fn interpolate(&mut self, t: f64) {
        for ((cur, a), b) in self
            .current
            .iter_mut()
            .zip(&self.initial)
            .zip(&self.target)
        {
            *cur = <Vec3 as Lerp>::lerp(a, b, t);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particles.rs"]
mod tests;

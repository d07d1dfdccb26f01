use glam::{Mat4, Vec3};
use rand::prelude::*;

use super::constants::{FIELD_EXTENT, PARTICLE_COUNT, ROTATION_STEP_RADIANS};

/// Fixed-size hero point cloud.
///
/// Positions and colors are sampled once at construction and never change;
/// the only mutation afterwards is the whole-field rotation advanced each
/// frame. Positions are uniform per axis in `[-FIELD_EXTENT/2, FIELD_EXTENT/2)`,
/// colors uniform per channel in `[0, 1)`.
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    rotation_x: f32,
    rotation_y: f32,
}

impl ParticleField {
    /// Sample a field from a caller-provided RNG.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(PARTICLE_COUNT);
        let mut colors = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
            ));
            colors.push(Vec3::new(rng.gen(), rng.gen(), rng.gen()));
        }
        Self {
            positions,
            colors,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Deterministic construction; the same seed yields the same field.
    pub fn generate(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Current rotation angles in radians, `(x, y)`.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    /// Advance the per-frame rotation on both axes by the fixed step.
    pub fn rotate(&mut self) {
        self.rotation_x += ROTATION_STEP_RADIANS;
        self.rotation_y += ROTATION_STEP_RADIANS;
    }

    /// World transform applied to the whole field.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y) * Mat4::from_rotation_x(self.rotation_x)
    }
}

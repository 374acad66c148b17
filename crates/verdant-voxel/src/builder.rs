//! Shared emit helpers behind every plant recipe.
//!
//! Recipes never touch [`VoxelSet`] directly: they describe lines, columns and
//! sampled volumes here, and the builder tags each cell with its layer and
//! applies the first-write-wins rule.

use glam::{IVec3, Vec3};
use rand::Rng;

use crate::{Layer, Rgb, VoxelSet};

/// Porous volume parameters for acceptance sampling.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SampledVolume {
    /// Center of the volume in lattice space.
    pub center: Vec3,
    /// Nominal radius.
    pub radius: f32,
    /// Per-cell radius perturbation, drawn uniformly from `[-noise, noise]`.
    pub noise: f32,
    /// Fraction of accepted cells dropped again for airiness.
    pub rejection: f64,
}

pub(crate) struct ShapeBuilder {
    set: VoxelSet,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self {
            set: VoxelSet::new(),
        }
    }

    /// Emits one cell; returns whether it landed.
    pub fn emit(&mut self, position: IVec3, color: Rgb, layer: Layer) -> bool {
        self.set.insert(position, color, layer)
    }

    /// Whether no earlier emit has claimed `position`.
    pub fn is_free(&self, position: IVec3) -> bool {
        !self.set.contains(position)
    }

    /// Emits `height` cells stacked upward from `base`.
    pub fn column(&mut self, base: IVec3, height: i32, color: Rgb, layer: Layer) {
        for dy in 0..height {
            self.emit(base + IVec3::Y * dy, color, layer);
        }
    }

    /// Emits a rasterized line from `from` to `to`, both endpoints included.
    pub fn line(&mut self, from: IVec3, to: IVec3, color: Rgb, layer: Layer) {
        let delta = to - from;
        let steps = delta.abs().max_element();
        if steps == 0 {
            self.emit(from, color, layer);
            return;
        }
        let start = from.as_vec3();
        let step = delta.as_vec3() / steps as f32;
        for s in 0..=steps {
            self.emit((start + step * s as f32).round().as_ivec3(), color, layer);
        }
    }

    /// Volumetric acceptance sampling: every cell of the bounding box whose
    /// center lies closer than a noise-perturbed radius is accepted, then an
    /// independent fraction of accepted cells is rejected.
    ///
    /// Returns the number of cells that landed.
    pub fn sample_sphere<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        volume: SampledVolume,
        color: Rgb,
        layer: Layer,
    ) -> usize {
        let reach = (volume.radius + volume.noise).ceil() as i32;
        let origin = volume.center.round().as_ivec3();
        let mut landed = 0;
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                for dz in -reach..=reach {
                    let cell = origin + IVec3::new(dx, dy, dz);
                    let distance = cell.as_vec3().distance(volume.center);
                    let threshold =
                        volume.radius + rng.random_range(-volume.noise..=volume.noise);
                    if distance >= threshold {
                        continue;
                    }
                    if rng.random_bool(volume.rejection) {
                        continue;
                    }
                    if self.emit(cell, color, layer) {
                        landed += 1;
                    }
                }
            }
        }
        landed
    }

    /// Horizontal 3×3 neighborhood around `center` (center excluded), each
    /// cell kept with probability `fill`.
    pub fn cloud<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        center: IVec3,
        fill: f64,
        color: Rgb,
        layer: Layer,
    ) {
        for dx in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                if rng.random_bool(fill) {
                    self.emit(center + IVec3::new(dx, 0, dz), color, layer);
                }
            }
        }
    }

    pub fn finish(self) -> VoxelSet {
        self.set
    }
}

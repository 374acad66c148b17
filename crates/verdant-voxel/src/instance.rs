//! Per-cube instance data handed to the renderer.
//!
//! The renderer draws one unit cube per voxel, scaled by the cell size and
//! translated by the structure's placement. This module only produces the
//! instance buffer contents; it knows nothing about GPU APIs.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::VoxelSet;

/// One instanced cube: world-space offset of its minimum corner and linear
/// RGBA color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    /// World-space position of the cube.
    pub offset: [f32; 3],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

impl VoxelSet {
    /// Maps every voxel to a cube at `origin + (x, y, z) * cell_size`.
    pub fn cube_instances(&self, cell_size: f32, origin: Vec3) -> Vec<CubeInstance> {
        self.iter()
            .map(|v| {
                let offset = origin + v.position().as_vec3() * cell_size;
                CubeInstance {
                    offset: offset.to_array(),
                    color: v.color.to_linear_rgba(),
                }
            })
            .collect()
    }
}

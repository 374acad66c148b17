//! Sparse voxel structures for the garden: colors, palettes, plant categories,
//! the procedural plant synthesizers and the fixed avatar model.

pub mod avatar;
pub mod category;
pub mod color;
pub mod instance;
pub mod plants;
pub mod seed;
pub mod voxel_set;

mod builder;

pub use avatar::synthesize_avatar;
pub use category::PlantCategory;
pub use color::{ColorPalette, Rgb};
pub use instance::CubeInstance;
pub use plants::{POT_TERRACOTTA, TRUNK_BROWN, synthesize};
pub use seed::{derive_plant_seed, plant_rng};
pub use voxel_set::{Layer, Voxel, VoxelSet};

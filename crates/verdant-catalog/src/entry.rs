//! A single catalog record.

use serde::{Deserialize, Serialize};
use verdant_voxel::{ColorPalette, PlantCategory};

/// One plant in the garden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantEntry {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Flavor text shown when the plant is focused.
    #[serde(default)]
    pub description: String,
    /// Recipe selector. Unknown names parse to `Unrecognized`.
    pub category: PlantCategory,
    pub palette: ColorPalette,
    /// Ground-plane position `(x, z)`.
    pub position: (f32, f32),
}

impl PlantEntry {
    pub fn new(
        name: impl Into<String>,
        category: PlantCategory,
        palette: ColorPalette,
        position: (f32, f32),
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            palette,
            position,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

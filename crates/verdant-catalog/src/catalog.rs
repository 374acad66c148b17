//! The ordered garden catalog and its built-in default.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use verdant_voxel::{ColorPalette, PlantCategory, Rgb};

use crate::{CatalogError, PlantEntry};

/// Radius of the ring the built-in garden is planted on.
const BUILTIN_RING_RADIUS: f32 = 7.0;

/// Ordered list of garden plants.
///
/// Order is significant: collision correction and proximity ties both follow
/// catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GardenCatalog {
    plants: Vec<PlantEntry>,
}

impl GardenCatalog {
    /// Wraps `plants` after checking it is non-empty with unique names.
    pub fn new(plants: Vec<PlantEntry>) -> Result<Self, CatalogError> {
        let catalog = Self { plants };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The garden used when no catalog file is configured.
    pub fn builtin() -> Self {
        let leaf = Rgb::hex(0x2F6B2F);
        let garden = [
            (
                "Bird of Paradise",
                PlantCategory::TallFlower,
                ColorPalette::new(Rgb::hex(0xF28C28), Rgb::hex(0x3A5BA0), leaf),
                "Crested blooms held high on stiff stalks.",
            ),
            (
                "Crimson Azalea",
                PlantCategory::BushFlower,
                ColorPalette::new(Rgb::hex(0xD7263D), Rgb::hex(0xFFE066), Rgb::hex(0x2E5E2B)),
                "A dense mound studded with red flowers.",
            ),
            (
                "Blossom Maple",
                PlantCategory::TreeSmall,
                ColorPalette::new(Rgb::hex(0xF4A7B9), Rgb::hex(0xFFFFFF), Rgb::hex(0x4C8C3A)),
                "A young tree with a few early blossoms.",
            ),
            (
                "Flamingo Flower",
                PlantCategory::BroadLeaf,
                ColorPalette::new(Rgb::hex(0xE0313F), Rgb::hex(0xF6D55C), Rgb::hex(0x1F5F2A)),
                "Heart-shaped leaves around a glossy red spathe.",
            ),
            (
                "Swiss Cheese Plant",
                PlantCategory::BroadLeaf,
                ColorPalette::without_accent(Rgb::hex(0x2D6A2E), Rgb::hex(0x2D6A2E)),
                "Nothing but leaves, holes included.",
            ),
            (
                "Morning Glory",
                PlantCategory::Vine,
                ColorPalette::new(Rgb::hex(0x6A4C93), Rgb::hex(0xF2F2F2), Rgb::hex(0x3E7B3A)),
                "Winds upward and opens at dawn.",
            ),
            (
                "Moth Orchid",
                PlantCategory::Orchid,
                ColorPalette::new(Rgb::hex(0xE8A3D0), Rgb::hex(0xB5367A), Rgb::hex(0x4F7F3A)),
                "An arching spray of blooms over a clay pot.",
            ),
            (
                "Golden Wattle",
                PlantCategory::BushFlower,
                ColorPalette::without_accent(Rgb::hex(0xF2C14E), Rgb::hex(0x55713A)),
                "Puffs of plain gold.",
            ),
        ];
        let count = garden.len();
        let plants = garden
            .into_iter()
            .enumerate()
            .map(|(i, (name, category, palette, description))| {
                let angle = i as f32 * std::f32::consts::TAU / count as f32;
                let position = (
                    angle.cos() * BUILTIN_RING_RADIUS,
                    angle.sin() * BUILTIN_RING_RADIUS,
                );
                PlantEntry::new(name, category, palette, position).with_description(description)
            })
            .collect();
        Self { plants }
    }

    /// Parses and validates a RON list of entries.
    pub fn from_ron_str(contents: &str) -> Result<Self, CatalogError> {
        let plants: Vec<PlantEntry> = ron::from_str(contents).map_err(CatalogError::ParseError)?;
        Self::new(plants)
    }

    /// Loads a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        let catalog = Self::from_ron_str(&contents)?;
        info!(
            path = %path.display(),
            plants = catalog.len(),
            "loaded garden catalog"
        );
        Ok(catalog)
    }

    /// Rejects an empty catalog and duplicate names.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.plants.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = FxHashSet::default();
        for plant in &self.plants {
            if !seen.insert(plant.name.as_str()) {
                return Err(CatalogError::DuplicateName(plant.name.clone()));
            }
            if plant.category == PlantCategory::Unrecognized {
                debug!(name = %plant.name, "plant has an unrecognized category");
            }
        }
        Ok(())
    }

    /// Plants in catalog order.
    pub fn plants(&self) -> &[PlantEntry] {
        &self.plants
    }

    pub fn get(&self, index: usize) -> Option<&PlantEntry> {
        self.plants.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlantEntry> {
        self.plants.get_mut(index)
    }

    /// Index and entry of the plant called `name`.
    pub fn find(&self, name: &str) -> Option<(usize, &PlantEntry)> {
        self.plants.iter().enumerate().find(|(_, p)| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

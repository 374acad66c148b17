//! Per-plant synthesized shapes, kept until the plant's look changes.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;
use verdant_catalog::PlantEntry;
use verdant_voxel::{ColorPalette, PlantCategory, VoxelSet, plant_rng, synthesize};

/// Everything a shape depends on besides the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ShapeKey {
    category: PlantCategory,
    palette: ColorPalette,
}

impl ShapeKey {
    fn of(plant: &PlantEntry) -> Self {
        Self {
            category: plant.category,
            palette: plant.palette,
        }
    }
}

struct CachedShape {
    key: ShapeKey,
    shape: VoxelSet,
}

/// Shapes keyed by catalog index.
///
/// A shape is regenerated only when its plant's category or palette differs
/// from the one it was built from. The generator is re-derived from the world
/// seed and plant name every time, so a regenerated shape is reproducible.
#[derive(Default)]
pub struct ShapeCache {
    shapes: FxHashMap<usize, CachedShape>,
    syntheses: u64,
}

impl ShapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape for the plant at `index`, synthesizing it if missing or stale.
    pub fn shape(&mut self, index: usize, plant: &PlantEntry, world_seed: u64) -> &VoxelSet {
        let key = ShapeKey::of(plant);
        let cached = match self.shapes.entry(index) {
            Entry::Occupied(entry) if entry.get().key == key => entry.into_mut(),
            Entry::Occupied(mut entry) => {
                debug!(plant = %plant.name, "plant changed, regrowing shape");
                entry.insert(grow(key, plant, world_seed));
                self.syntheses += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.syntheses += 1;
                entry.insert(grow(key, plant, world_seed))
            }
        };
        &cached.shape
    }

    /// Drops every cached shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Number of synthesis runs so far.
    pub fn syntheses(&self) -> u64 {
        self.syntheses
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn grow(key: ShapeKey, plant: &PlantEntry, world_seed: u64) -> CachedShape {
    let mut rng = plant_rng(world_seed, plant.name.as_str());
    CachedShape {
        key,
        shape: synthesize(key.category, &key.palette, &mut rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_voxel::Rgb;

    fn vine() -> PlantEntry {
        PlantEntry::new(
            "Morning Glory",
            PlantCategory::Vine,
            ColorPalette::new(Rgb::hex(0x6A4C93), Rgb::hex(0xF2F2F2), Rgb::hex(0x3E7B3A)),
            (0.0, 0.0),
        )
    }

    #[test]
    fn test_cached_until_changed() {
        let mut cache = ShapeCache::new();
        let mut plant = vine();
        let first = cache.shape(0, &plant, 7).clone();
        assert_eq!(cache.shape(0, &plant, 7), &first);
        assert_eq!(cache.syntheses(), 1);

        plant.description = "renamed flavor text".to_string();
        plant.position = (4.0, 4.0);
        cache.shape(0, &plant, 7);
        assert_eq!(cache.syntheses(), 1, "description and position do not matter");

        plant.palette.primary = Rgb::hex(0x1E90FF);
        let recolored = cache.shape(0, &plant, 7).clone();
        assert_eq!(cache.syntheses(), 2);
        assert_ne!(recolored, first);
        // Same seed, same geometry: only colors moved.
        assert_eq!(recolored.len(), first.len());

        plant.category = PlantCategory::Orchid;
        cache.shape(0, &plant, 7);
        assert_eq!(cache.syntheses(), 3);
    }

    #[test]
    fn test_regrown_shape_is_reproducible() {
        let mut a = ShapeCache::new();
        let mut b = ShapeCache::new();
        let plant = vine();
        assert_eq!(a.shape(3, &plant, 99), b.shape(3, &plant, 99));
    }

    #[test]
    fn test_clear_forces_resynthesis() {
        let mut cache = ShapeCache::new();
        let plant = vine();
        cache.shape(0, &plant, 1);
        cache.shape(1, &plant, 1);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
        cache.shape(0, &plant, 1);
        assert_eq!(cache.syntheses(), 3);
    }
}

//! Procedural plant synthesis.
//!
//! Every recipe builds three layers on a shared [`ShapeBuilder`]:
//!
//! - **structural**: rigid stalks, trunks, stems and pots,
//! - **mass**: the body of the plant, either explicit offsets along the
//!   structure or porous acceptance-sampled volumes,
//! - **ornament**: flower motifs at attachment points, painted with
//!   `primary` and the palette accent, with some attachment points left bare.
//!
//! The only randomness comes from the generator passed in, so a fixed seed
//! reproduces a plant exactly.

mod flowers;
mod foliage;

use glam::IVec3;
use rand::Rng;
use tracing::trace;

use crate::builder::ShapeBuilder;
use crate::{ColorPalette, Layer, PlantCategory, Rgb, VoxelSet};

/// Bark color shared by the tree trunk and the bush stub.
pub const TRUNK_BROWN: Rgb = Rgb::hex(0x6B4A2F);
/// Orchid pot color.
pub const POT_TERRACOTTA: Rgb = Rgb::hex(0xB8643C);

/// Height of the column grown for an unrecognized category.
const FALLBACK_HEIGHT: i32 = 6;

/// Synthesizes the voxel structure for a plant.
///
/// Never fails: [`PlantCategory::Unrecognized`] yields a single vertical
/// foliage-colored column.
pub fn synthesize<R: Rng + ?Sized>(
    category: PlantCategory,
    palette: &ColorPalette,
    rng: &mut R,
) -> VoxelSet {
    let mut builder = ShapeBuilder::new();
    match category {
        PlantCategory::TallFlower => flowers::tall_flower(&mut builder, palette, rng),
        PlantCategory::BushFlower => flowers::bush_flower(&mut builder, palette, rng),
        PlantCategory::Orchid => flowers::orchid(&mut builder, palette, rng),
        PlantCategory::TreeSmall => foliage::tree_small(&mut builder, palette, rng),
        PlantCategory::BroadLeaf => foliage::broad_leaf(&mut builder, palette),
        PlantCategory::Vine => foliage::vine(&mut builder, palette, rng),
        PlantCategory::Unrecognized => {
            builder.column(IVec3::ZERO, FALLBACK_HEIGHT, palette.foliage, Layer::Structural);
        }
    }
    let set = builder.finish();
    trace!(
        category = %category,
        voxels = set.len(),
        structural = set.layer_count(Layer::Structural),
        mass = set.layer_count(Layer::Mass),
        ornament = set.layer_count(Layer::Ornament),
        "synthesized plant"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Voxel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rustc_hash::FxHashSet;

    const RED: Rgb = Rgb::hex(0xE8453C);
    const GOLD: Rgb = Rgb::hex(0xF2C14E);
    const LEAF: Rgb = Rgb::hex(0x2F6B2F);

    fn palette() -> ColorPalette {
        ColorPalette::new(RED, GOLD, LEAF)
    }

    fn grow(category: PlantCategory, palette: &ColorPalette, seed: u64) -> VoxelSet {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        synthesize(category, palette, &mut rng)
    }

    fn layer_positions(set: &VoxelSet, layer: Layer) -> Vec<IVec3> {
        set.layer(layer).map(Voxel::position).collect()
    }

    #[test]
    fn test_every_category_non_empty_without_duplicates() {
        for category in PlantCategory::ALL {
            for seed in 0..20 {
                let set = grow(category, &palette(), seed);
                assert!(!set.is_empty(), "{category} produced nothing");
                let unique: FxHashSet<IVec3> = set.iter().map(Voxel::position).collect();
                assert_eq!(unique.len(), set.len(), "{category} has duplicate cells");
            }
        }
    }

    #[test]
    fn test_every_category_has_all_three_layers() {
        for category in PlantCategory::ALL {
            let set = grow(category, &palette(), 11);
            assert!(set.layer_count(Layer::Structural) > 0, "{category}");
            assert!(set.layer_count(Layer::Mass) > 0, "{category}");
            assert!(set.layer_count(Layer::Ornament) > 0, "{category}");
        }
    }

    #[test]
    fn test_same_seed_same_plant() {
        for category in PlantCategory::ALL {
            assert_eq!(grow(category, &palette(), 42), grow(category, &palette(), 42));
        }
    }

    #[test]
    fn test_colors_stay_within_palette() {
        let allowed = [RED, GOLD, LEAF, TRUNK_BROWN, POT_TERRACOTTA];
        for category in PlantCategory::ALL {
            let set = grow(category, &palette(), 5);
            for v in &set {
                assert!(allowed.contains(&v.color), "{category} used {}", v.color);
            }
        }
    }

    #[test]
    fn test_missing_secondary_never_leaks_other_colors() {
        let palette = ColorPalette::without_accent(RED, LEAF);
        for category in PlantCategory::ALL {
            for seed in 0..10 {
                let set = grow(category, &palette, seed);
                for v in set.layer(Layer::Ornament) {
                    assert!(
                        v.color == RED || v.color == LEAF,
                        "{category} ornament used {}",
                        v.color
                    );
                }
            }
        }
    }

    #[test]
    fn test_bush_without_secondary_ornaments_are_primary() {
        let palette = ColorPalette::without_accent(RED, LEAF);
        for seed in 0..25 {
            let set = grow(PlantCategory::BushFlower, &palette, seed);
            assert!(set.layer_count(Layer::Ornament) > 0);
            assert!(set.layer(Layer::Ornament).all(|v| v.color == RED));
        }
    }

    #[test]
    fn test_fixed_structures_identical_across_seeds() {
        for category in [
            PlantCategory::BushFlower,
            PlantCategory::TreeSmall,
            PlantCategory::BroadLeaf,
            PlantCategory::Vine,
            PlantCategory::Orchid,
        ] {
            let reference = layer_positions(&grow(category, &palette(), 0), Layer::Structural);
            for seed in 1..15 {
                assert_eq!(
                    layer_positions(&grow(category, &palette(), seed), Layer::Structural),
                    reference,
                    "{category} structural layer changed with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_tall_flower_stalk_bases_fixed() {
        for seed in 0..15 {
            let set = grow(PlantCategory::TallFlower, &palette(), seed);
            for (x, z) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
                for y in 0..12 {
                    let v = set.get(IVec3::new(x, y, z)).expect("stalk cell");
                    assert_eq!(v.layer, Layer::Structural);
                    assert_eq!(v.color, LEAF);
                }
            }
        }
    }

    #[test]
    fn test_unrecognized_is_foliage_column() {
        let set = grow(PlantCategory::Unrecognized, &palette(), 0);
        assert_eq!(set.len(), FALLBACK_HEIGHT as usize);
        for (i, v) in set.iter().enumerate() {
            assert_eq!(v.position(), IVec3::new(0, i as i32, 0));
            assert_eq!(v.color, LEAF);
        }
    }

    #[test]
    fn test_different_seeds_vary_random_recipes() {
        for category in [
            PlantCategory::TallFlower,
            PlantCategory::BushFlower,
            PlantCategory::Vine,
        ] {
            let a = grow(category, &palette(), 1);
            let differs = (2..10).any(|seed| grow(category, &palette(), seed) != a);
            assert!(differs, "{category} ignores its generator");
        }
    }
}

//! Flowering recipes: tall flower, flowering bush and potted orchid.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use glam::{IVec2, IVec3, Vec3};
use rand::Rng;
use tracing::trace;

use super::{POT_TERRACOTTA, TRUNK_BROWN};
use crate::builder::{SampledVolume, ShapeBuilder};
use crate::{ColorPalette, Layer};

// ---------------------------------------------------------------------------
// Tall flower
// ---------------------------------------------------------------------------

/// Stalk footprints, a 2×2 arrangement with one free cell between stalks.
const TALL_FLOWER_STALKS: [IVec2; 4] = [
    IVec2::new(-1, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(1, 1),
];
const TALL_FLOWER_HEIGHT: RangeInclusive<i32> = 12..=17;
/// Per-stalk offsets from the drawn height, clamped back into range.
const STALK_HEIGHT_OFFSETS: [i32; 4] = [0, -1, -2, 1];
/// First stalk cell carrying a blade, then every `BLADE_INTERVAL` cells up to
/// two cells below the top.
const BLADE_START: i32 = 2;
const BLADE_INTERVAL: usize = 3;
const BLADE_LENGTH: i32 = 3;
/// Beak cells as `(outward, dy)` from the cell above the stalk top.
const BEAK: [(i32, i32); 4] = [(0, 0), (1, 0), (2, 0), (3, -1)];
/// Crest cells, painted with the accent color.
const CREST: [(i32, i32); 3] = [(1, 1), (1, 2), (2, 2)];

fn stalk_heights(drawn: i32) -> [i32; 4] {
    STALK_HEIGHT_OFFSETS.map(|offset| {
        (drawn + offset).clamp(*TALL_FLOWER_HEIGHT.start(), *TALL_FLOWER_HEIGHT.end())
    })
}

pub(super) fn tall_flower<R: Rng + ?Sized>(
    b: &mut ShapeBuilder,
    palette: &ColorPalette,
    rng: &mut R,
) {
    let heights = stalk_heights(rng.random_range(TALL_FLOWER_HEIGHT));

    for (stalk, &height) in TALL_FLOWER_STALKS.iter().zip(&heights) {
        let base = IVec3::new(stalk.x, 0, stalk.y);
        b.column(base, height, palette.foliage, Layer::Structural);
    }

    // Blades point away from the clump, alternating between the X and Z side.
    for (stalk, &height) in TALL_FLOWER_STALKS.iter().zip(&heights) {
        let base = IVec3::new(stalk.x, 0, stalk.y);
        for (i, y) in (BLADE_START..height - 2).step_by(BLADE_INTERVAL).enumerate() {
            let side = if i % 2 == 0 {
                IVec3::new(stalk.x.signum(), 0, 0)
            } else {
                IVec3::new(0, 0, stalk.y.signum())
            };
            for k in 1..=BLADE_LENGTH {
                let cell = base + side * k + IVec3::Y * (y + k / 2);
                b.emit(cell, palette.foliage, Layer::Mass);
            }
        }
    }

    let bare = rng.random_range(0..TALL_FLOWER_STALKS.len());
    for (i, (stalk, &height)) in TALL_FLOWER_STALKS.iter().zip(&heights).enumerate() {
        if i == bare {
            continue;
        }
        let top = IVec3::new(stalk.x, height, stalk.y);
        let outward = IVec3::new(stalk.x.signum(), 0, 0);
        for (along, dy) in BEAK {
            b.emit(top + outward * along + IVec3::Y * dy, palette.primary, Layer::Ornament);
        }
        for (along, dy) in CREST {
            b.emit(top + outward * along + IVec3::Y * dy, palette.accent(), Layer::Ornament);
        }
    }
}

// ---------------------------------------------------------------------------
// Flowering bush
// ---------------------------------------------------------------------------

const BUSH_STUB_HEIGHT: i32 = 2;
pub(super) const BUSH_CROWN: SampledVolume = SampledVolume {
    center: Vec3::new(0.0, 4.0, 0.0),
    radius: 3.5,
    noise: 0.5,
    rejection: 0.1,
};
const BUSH_BLOOMS: usize = 8;
/// Blooms sit this far outside the nominal crown radius.
const BLOOM_SHELL: f32 = 1.0;
/// Lowest bloom direction, as the sine of its elevation.
const BLOOM_MIN_ELEVATION: f32 = -0.2;
const BLOOM_ACCENT_CHANCE: f64 = 0.75;
/// Direction draws per bloom before it is given up.
const BLOOM_PLACEMENT_ATTEMPTS: usize = 64;
const PETAL_CROSS: [IVec3; 4] = [IVec3::X, IVec3::NEG_X, IVec3::Z, IVec3::NEG_Z];

pub(super) fn bush_flower<R: Rng + ?Sized>(
    b: &mut ShapeBuilder,
    palette: &ColorPalette,
    rng: &mut R,
) {
    b.column(IVec3::ZERO, BUSH_STUB_HEIGHT, TRUNK_BROWN, Layer::Structural);

    // Blooms go down before the crown so foliage never claims a petal cell.
    for bloom in 0..BUSH_BLOOMS {
        let Some(center) = place_bloom(b, rng) else {
            trace!(bloom, "no free bloom site on the crown");
            continue;
        };
        for petal in PETAL_CROSS {
            b.emit(center + petal, palette.primary, Layer::Ornament);
        }
        if rng.random_bool(BLOOM_ACCENT_CHANCE) {
            b.emit(center, palette.accent(), Layer::Ornament);
        }
    }

    b.sample_sphere(rng, BUSH_CROWN, palette.foliage, Layer::Mass);
}

/// Draws bloom directions until the whole motif footprint is free.
///
/// Directions are uniform on the upper part of the sphere: uniform height and
/// uniform azimuth give uniform area on a spherical zone.
fn place_bloom<R: Rng + ?Sized>(b: &ShapeBuilder, rng: &mut R) -> Option<IVec3> {
    (0..BLOOM_PLACEMENT_ATTEMPTS).find_map(|_| {
        let up = rng.random_range(BLOOM_MIN_ELEVATION..=1.0);
        let azimuth = rng.random_range(0.0..TAU);
        let ring = (1.0 - up * up).sqrt();
        let direction = Vec3::new(ring * azimuth.cos(), up, ring * azimuth.sin());
        let center = (BUSH_CROWN.center + direction * (BUSH_CROWN.radius + BLOOM_SHELL))
            .round()
            .as_ivec3();
        let clear = b.is_free(center) && PETAL_CROSS.iter().all(|&p| b.is_free(center + p));
        clear.then_some(center)
    })
}

// ---------------------------------------------------------------------------
// Orchid
// ---------------------------------------------------------------------------

const STEM_STEPS: usize = 15;
const STEM_RISE: usize = 5;
const STEM_ARC: usize = 5;
/// The arc keeps climbing for its first two steps before levelling out.
const ARC_CLIMB: usize = 2;
/// Leaf cells, one row per leaf; rows pair up across the pot.
const ORCHID_LEAVES: [[IVec3; 4]; 4] = [
    [
        IVec3::new(-1, 1, 0),
        IVec3::new(-2, 1, 0),
        IVec3::new(-3, 1, 0),
        IVec3::new(-4, 0, 0),
    ],
    [
        IVec3::new(1, 1, 0),
        IVec3::new(2, 1, 0),
        IVec3::new(3, 1, 0),
        IVec3::new(4, 0, 0),
    ],
    [
        IVec3::new(1, 1, -1),
        IVec3::new(1, 1, -2),
        IVec3::new(2, 1, -3),
        IVec3::new(2, 0, -4),
    ],
    [
        IVec3::new(-1, 1, 1),
        IVec3::new(-1, 1, 2),
        IVec3::new(-2, 1, 3),
        IVec3::new(-2, 0, 4),
    ],
];
/// Blooms hang off every second arch step after this one.
const BLOOM_AFTER_STEP: usize = 6;
/// Bloom center relative to its arch step: one below, one to the side.
const BLOOM_OFFSET: IVec3 = IVec3::new(0, -1, 1);
/// Two wings and a lip around the bloom center.
const BUTTERFLY: [IVec3; 3] = [IVec3::NEG_X, IVec3::X, IVec3::NEG_Y];
const ORCHID_ACCENT_CHANCE: f64 = 0.7;

fn stem_step(i: usize) -> IVec3 {
    if i < STEM_RISE {
        IVec3::Y
    } else if i < STEM_RISE + STEM_ARC {
        if i < STEM_RISE + ARC_CLIMB {
            IVec3::X + IVec3::Y
        } else {
            IVec3::X
        }
    } else if i % 2 == 0 {
        IVec3::X + IVec3::NEG_Y
    } else {
        IVec3::NEG_Y
    }
}

pub(super) fn orchid<R: Rng + ?Sized>(b: &mut ShapeBuilder, palette: &ColorPalette, rng: &mut R) {
    for x in -1..=1 {
        for z in -1..=1 {
            if x != 0 || z != 0 {
                b.emit(IVec3::new(x, 0, z), POT_TERRACOTTA, Layer::Structural);
            }
        }
    }

    let mut cursor = IVec3::ZERO;
    let mut arch = [IVec3::ZERO; STEM_STEPS];
    for (i, point) in arch.iter_mut().enumerate() {
        cursor += stem_step(i);
        *point = cursor;
        b.emit(cursor, palette.foliage, Layer::Structural);
    }

    for leaf in ORCHID_LEAVES {
        for cell in leaf {
            b.emit(cell, palette.foliage, Layer::Mass);
        }
    }

    for (i, point) in arch.iter().enumerate() {
        if i <= BLOOM_AFTER_STEP || i % 2 != 0 {
            continue;
        }
        let center = *point + BLOOM_OFFSET;
        for wing in BUTTERFLY {
            b.emit(center + wing, palette.primary, Layer::Ornament);
        }
        if rng.random_bool(ORCHID_ACCENT_CHANCE) {
            b.emit(center, palette.accent(), Layer::Ornament);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlantCategory, Rgb, VoxelSet, synthesize};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const PALETTE: ColorPalette = ColorPalette::new(
        Rgb::hex(0xF28C28),
        Rgb::hex(0x3A5BD9),
        Rgb::hex(0x3C7A3B),
    );

    fn grow(category: PlantCategory, seed: u64) -> VoxelSet {
        synthesize(category, &PALETTE, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_tall_flower_layer_counts() {
        for seed in 0..40 {
            let set = grow(PlantCategory::TallFlower, seed);
            let structural = set.layer_count(Layer::Structural);
            let mass = set.layer_count(Layer::Mass);
            assert!((48..=68).contains(&structural), "structural={structural}");
            assert!((36..=60).contains(&mass), "mass={mass}");
            // Three crowned stalks, seven cells each.
            assert_eq!(set.layer_count(Layer::Ornament), 21);
        }
    }

    #[test]
    fn test_stalk_heights_follow_one_draw() {
        assert_eq!(stalk_heights(12), [12, 12, 12, 13]);
        assert_eq!(stalk_heights(14), [14, 13, 12, 15]);
        assert_eq!(stalk_heights(17), [17, 16, 15, 17]);
    }

    #[test]
    fn test_tall_flower_structure_from_single_height() {
        for seed in 0..40 {
            let set = grow(PlantCategory::TallFlower, seed);
            let measured: Vec<i32> = TALL_FLOWER_STALKS
                .iter()
                .map(|s| {
                    (0..)
                        .take_while(|&y| {
                            set.get(IVec3::new(s.x, y, s.y))
                                .is_some_and(|v| v.layer == Layer::Structural)
                        })
                        .count() as i32
                })
                .collect();
            let drawn = measured[0];
            assert!(TALL_FLOWER_HEIGHT.contains(&drawn));
            assert_eq!(measured, stalk_heights(drawn), "seed {seed}");
            let total: i32 = measured.iter().sum();
            assert_eq!(set.layer_count(Layer::Structural), total as usize);
        }
    }

    #[test]
    fn test_tall_flower_one_stalk_bare() {
        for seed in 0..20 {
            let set = grow(PlantCategory::TallFlower, seed);
            let crowned = TALL_FLOWER_STALKS
                .iter()
                .filter(|s| {
                    let top = (0..=TALL_FLOWER_HEIGHT.end() + 1)
                        .rev()
                        .find(|&y| set.contains(IVec3::new(s.x, y, s.y)))
                        .unwrap();
                    set.get(IVec3::new(s.x, top, s.y)).unwrap().layer == Layer::Ornament
                })
                .count();
            assert_eq!(crowned, 3);
        }
    }

    #[test]
    fn test_tall_flower_crest_uses_accent() {
        let set = grow(PlantCategory::TallFlower, 3);
        let accents = set
            .layer(Layer::Ornament)
            .filter(|v| v.color == PALETTE.accent())
            .count();
        assert_eq!(accents, 9);
    }

    #[test]
    fn test_bush_stub_and_bloom_count() {
        for seed in 0..30 {
            let set = grow(PlantCategory::BushFlower, seed);
            assert_eq!(set.layer_count(Layer::Structural), 2);
            assert_eq!(set.get(IVec3::ZERO).unwrap().color, TRUNK_BROWN);
            // Eight crosses plus their optional centers.
            assert!((32..=40).contains(&set.layer_count(Layer::Ornament)));
        }
    }

    #[test]
    fn test_bush_keeps_every_petal() {
        for seed in 0..200 {
            let set = grow(PlantCategory::BushFlower, seed);
            let petals = set
                .layer(Layer::Ornament)
                .filter(|v| v.color == PALETTE.primary)
                .count();
            assert_eq!(petals, BUSH_BLOOMS * PETAL_CROSS.len(), "seed {seed}");
        }
    }

    #[test]
    fn test_bush_crown_within_sampling_bounds() {
        for seed in 0..30 {
            let set = grow(PlantCategory::BushFlower, seed);
            for v in set.layer(Layer::Mass) {
                let d = v.position().as_vec3().distance(BUSH_CROWN.center);
                assert!(d < BUSH_CROWN.radius + BUSH_CROWN.noise, "cell at distance {d}");
            }
            let mass = set.layer_count(Layer::Mass);
            assert!((90..=250).contains(&mass), "mass={mass}");
        }
    }

    #[test]
    fn test_bush_crown_is_porous() {
        // Every cell within 3 of the center always passes the radius test, so
        // only the rejection pass can leave holes there.
        let set = grow(PlantCategory::BushFlower, 8);
        let core = set
            .layer(Layer::Mass)
            .filter(|v| v.position().as_vec3().distance(BUSH_CROWN.center) < 3.0)
            .count();
        // 93 lattice cells lie strictly within distance 3.
        assert!(core < 93, "core={core}");
    }

    #[test]
    fn test_orchid_exact_structure() {
        let set = grow(PlantCategory::Orchid, 0);
        assert_eq!(set.layer_count(Layer::Structural), 23);
        assert_eq!(set.layer_count(Layer::Mass), 16);
        let pot = set
            .iter()
            .filter(|v| v.color == POT_TERRACOTTA)
            .count();
        assert_eq!(pot, 8);
        assert!(!set.contains(IVec3::ZERO), "pot ring is hollow");
    }

    #[test]
    fn test_orchid_stem_rises_arcs_and_droops() {
        let mut cursor = IVec3::ZERO;
        let path: Vec<IVec3> = (0..STEM_STEPS)
            .map(|i| {
                cursor += stem_step(i);
                cursor
            })
            .collect();
        assert_eq!(path[4], IVec3::new(0, 5, 0));
        assert_eq!(path[9], IVec3::new(5, 7, 0));
        assert_eq!(path[14], IVec3::new(8, 2, 0));
        assert!(path[10..].windows(2).all(|w| w[1].y < w[0].y));
    }

    #[test]
    fn test_orchid_four_blooms() {
        for seed in 0..30 {
            let set = grow(PlantCategory::Orchid, seed);
            let ornament = set.layer_count(Layer::Ornament);
            assert!((12..=16).contains(&ornament), "ornament={ornament}");
            let wings = set
                .layer(Layer::Ornament)
                .filter(|v| v.color == PALETTE.primary)
                .count();
            assert_eq!(wings, 12);
        }
    }
}

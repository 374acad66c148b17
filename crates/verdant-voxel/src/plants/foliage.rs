//! Foliage-dominated recipes: small tree, broad leaf and vine.

use glam::{IVec3, Vec2};
use rand::Rng;
use rand::seq::SliceRandom;

use super::TRUNK_BROWN;
use crate::builder::ShapeBuilder;
use crate::{ColorPalette, Layer};

// ---------------------------------------------------------------------------
// Small tree
// ---------------------------------------------------------------------------

const TRUNK_HEIGHT: i32 = 8;
/// The lowest trunk cells widen into a plus-shaped flare.
const TRUNK_FLARE_HEIGHT: i32 = 2;
const BRANCH_TIPS: [IVec3; 5] = [
    IVec3::new(0, 9, 0),
    IVec3::new(3, 8, 1),
    IVec3::new(-3, 7, -1),
    IVec3::new(1, 7, -3),
    IVec3::new(-1, 8, 3),
];
/// Branches leave the trunk this far below their tip.
const BRANCH_DROP: i32 = 2;
/// Canopy cells within this Manhattan distance of a tip are always filled.
const CANOPY_CORE: i32 = 2;
/// Cells exactly at this distance are filled with `CANOPY_EDGE_FILL`.
const CANOPY_EDGE: i32 = 3;
const CANOPY_EDGE_FILL: f64 = 0.6;
const BLOSSOM_TIPS: usize = 2;
/// Primary cell, then accent cell, above a blossoming tip.
const BLOSSOM_PAIR: [IVec3; 2] = [IVec3::new(0, 3, 0), IVec3::new(1, 3, 0)];

pub(super) fn tree_small<R: Rng + ?Sized>(
    b: &mut ShapeBuilder,
    palette: &ColorPalette,
    rng: &mut R,
) {
    b.column(IVec3::ZERO, TRUNK_HEIGHT, TRUNK_BROWN, Layer::Structural);
    for side in [IVec3::X, IVec3::NEG_X, IVec3::Z, IVec3::NEG_Z] {
        b.column(side, TRUNK_FLARE_HEIGHT, TRUNK_BROWN, Layer::Structural);
    }
    for tip in BRANCH_TIPS {
        let fork = IVec3::new(0, (tip.y - BRANCH_DROP).min(TRUNK_HEIGHT - 1), 0);
        b.line(fork, tip, TRUNK_BROWN, Layer::Structural);
    }

    // Blossoms go down before the canopy so leaves never hide them.
    let mut tips = [0, 1, 2, 3, 4];
    tips.shuffle(rng);
    for &i in &tips[..BLOSSOM_TIPS] {
        let [primary, accent] = BLOSSOM_PAIR.map(|offset| BRANCH_TIPS[i] + offset);
        b.emit(primary, palette.primary, Layer::Ornament);
        b.emit(accent, palette.accent(), Layer::Ornament);
    }

    for tip in BRANCH_TIPS {
        for dx in -CANOPY_EDGE..=CANOPY_EDGE {
            for dy in -CANOPY_EDGE..=CANOPY_EDGE {
                for dz in -CANOPY_EDGE..=CANOPY_EDGE {
                    let manhattan = dx.abs() + dy.abs() + dz.abs();
                    let filled = if manhattan <= CANOPY_CORE {
                        true
                    } else if manhattan == CANOPY_EDGE {
                        rng.random_bool(CANOPY_EDGE_FILL)
                    } else {
                        false
                    };
                    if filled {
                        b.emit(tip + IVec3::new(dx, dy, dz), palette.foliage, Layer::Mass);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Broad leaf
// ---------------------------------------------------------------------------

const BASE_COLUMNS: [IVec3; 2] = [IVec3::ZERO, IVec3::X];
const BASE_HEIGHT: i32 = 2;
const LEAF_COUNT: usize = 5;
/// Rotation of the first leaf, so no leaf lines up with a lattice axis.
const LEAF_ANGLE_OFFSET: f32 = 0.3;
/// Leaves radiate from between the two base columns.
const LEAF_ORIGIN: Vec2 = Vec2::new(0.5, 0.0);
const PETIOLE_LENGTH: i32 = 4;
const BLADE_DISTANCE: f32 = 6.0;
const BLADE_HEIGHT: i32 = 6;
const HEART_REACH: i32 = 3;
/// Holes cut into every blade, as `(along, across)` blade coordinates.
const FENESTRATIONS: [(i32, i32); 2] = [(0, 2), (1, -1)];
const SPADIX_BASE: i32 = 3;
const SPADIX_TOP: i32 = 6;
const SPATHE_HALF_WIDTH: i32 = 1;

/// Heart outline in blade coordinates: `along` points away from the plant,
/// the two lobes sit behind the stalk attachment.
fn in_heart(along: i32, across: i32) -> bool {
    let lobe = along == -2 && (1..=2).contains(&across.abs());
    let body = along >= -1 && along.abs() + across.abs() <= HEART_REACH;
    (lobe || body) && !FENESTRATIONS.contains(&(along, across))
}

pub(super) fn broad_leaf(b: &mut ShapeBuilder, palette: &ColorPalette) {
    for column in BASE_COLUMNS {
        b.column(column, BASE_HEIGHT, palette.foliage, Layer::Structural);
    }

    for i in 0..LEAF_COUNT {
        let angle = LEAF_ANGLE_OFFSET + i as f32 * std::f32::consts::TAU / LEAF_COUNT as f32;
        let dir = Vec2::from_angle(angle);
        let across_dir = dir.perp();

        for k in 1..=PETIOLE_LENGTH {
            let p = (LEAF_ORIGIN + dir * k as f32).round();
            b.emit(IVec3::new(p.x as i32, 1 + k, p.y as i32), palette.foliage, Layer::Mass);
        }

        let blade_center = LEAF_ORIGIN + dir * BLADE_DISTANCE;
        for along in -HEART_REACH..=HEART_REACH {
            for across in -HEART_REACH..=HEART_REACH {
                if !in_heart(along, across) {
                    continue;
                }
                let p = (blade_center + dir * along as f32 + across_dir * across as f32).round();
                // Droops toward the rim and the tip.
                let y = BLADE_HEIGHT - (across.abs() + along.max(0)) / 2;
                b.emit(IVec3::new(p.x as i32, y, p.y as i32), palette.foliage, Layer::Mass);
            }
        }
    }

    // A spathe only makes sense when it contrasts with the leaves.
    if palette.primary == palette.foliage {
        return;
    }
    for y in SPADIX_BASE..=SPADIX_TOP {
        b.emit(IVec3::new(0, y, 0), palette.foliage, Layer::Ornament);
    }
    let spathe_y = SPADIX_TOP + 1;
    for x in -SPATHE_HALF_WIDTH..=SPATHE_HALF_WIDTH {
        for z in -SPATHE_HALF_WIDTH..=SPATHE_HALF_WIDTH {
            b.emit(IVec3::new(x, spathe_y, z), palette.primary, Layer::Ornament);
        }
    }
    b.emit(IVec3::new(0, spathe_y + 1, 0), palette.accent(), Layer::Ornament);
}

// ---------------------------------------------------------------------------
// Vine
// ---------------------------------------------------------------------------

const VINE_HEIGHT: i32 = 18;
const VINE_RADIUS: f32 = 2.0;
/// Phase advance per height step, in radians.
const VINE_PHASE_STEP: f32 = 0.45;
const CLOUD_INTERVAL: usize = 2;
const CLOUD_FILL: f64 = 0.7;
const CLUSTER_INTERVAL: usize = 3;
/// The lowest steps stay bare of flowers.
const CLUSTER_SKIP: i32 = 3;
/// Flower clusters hang just outside the foliage clouds.
const CLUSTER_RADIUS: f32 = 3.5;

fn winding(y: i32, radius: f32) -> IVec3 {
    let phase = y as f32 * VINE_PHASE_STEP;
    IVec3::new(
        (phase.sin() * radius).round() as i32,
        y,
        (phase.cos() * radius).round() as i32,
    )
}

pub(super) fn vine<R: Rng + ?Sized>(b: &mut ShapeBuilder, palette: &ColorPalette, rng: &mut R) {
    for y in 0..VINE_HEIGHT {
        b.emit(winding(y, VINE_RADIUS), palette.foliage, Layer::Structural);
    }

    // Clusters claim their cells before the clouds fill in around them.
    for y in (CLUSTER_SKIP..VINE_HEIGHT).step_by(CLUSTER_INTERVAL) {
        let bloom = winding(y, CLUSTER_RADIUS);
        b.emit(bloom, palette.primary, Layer::Ornament);
        b.emit(bloom + IVec3::NEG_Y, palette.primary, Layer::Ornament);
        b.emit(bloom + IVec3::Y, palette.accent(), Layer::Ornament);
    }

    for y in (0..VINE_HEIGHT).step_by(CLOUD_INTERVAL) {
        b.cloud(rng, winding(y, VINE_RADIUS), CLOUD_FILL, palette.foliage, Layer::Mass);
    }
}

//! The walking figure.
//!
//! Fully deterministic: shoes, legs, hips, torso, arms and hands, a 3×3×3
//! head, and hair that caps the head and wraps its sides, back and front.

use glam::IVec3;

use crate::{Layer, Rgb, VoxelSet};

const SHOE: Rgb = Rgb::hex(0x3B2F2F);
const SKIN: Rgb = Rgb::hex(0xF1C27D);
const HIP: Rgb = Rgb::hex(0x3A5A8C);
const SHIRT: Rgb = Rgb::hex(0xD9534F);
const HAIR: Rgb = Rgb::hex(0x4A3222);

const HEAD_BASE: i32 = 6;
const HEAD_TOP: i32 = 8;

/// Builds the avatar's voxel figure, feet at `y = 0`, facing `+Z`.
pub fn synthesize_avatar() -> VoxelSet {
    let mut set = VoxelSet::new();
    let mut put = |x: i32, y: i32, z: i32, color: Rgb| {
        set.insert(IVec3::new(x, y, z), color, Layer::Structural);
    };

    for x in [-1, 1] {
        put(x, 0, 0, SHOE);
        put(x, 1, 0, SKIN);
        put(x, 2, 0, HIP);
    }
    for x in -1..=1 {
        for y in 3..=5 {
            put(x, y, 0, SHIRT);
        }
    }
    for x in [-2, 2] {
        put(x, 3, 0, SKIN);
        put(x, 4, 0, SHIRT);
        put(x, 5, 0, SHIRT);
    }
    for x in -1..=1 {
        for y in HEAD_BASE..=HEAD_TOP {
            for z in -1..=1 {
                put(x, y, z, SKIN);
            }
        }
    }

    for x in -1..=1 {
        for z in -1..=1 {
            put(x, HEAD_TOP + 1, z, HAIR);
        }
    }
    for x in [-2, 2] {
        for z in -1..=1 {
            put(x, HEAD_TOP, z, HAIR);
        }
    }
    for x in -1..=1 {
        for y in HEAD_TOP - 1..=HEAD_TOP {
            put(x, y, -2, HAIR);
        }
    }
    for x in [-1, 0] {
        put(x, HEAD_TOP, 2, HAIR);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_is_deterministic() {
        assert_eq!(synthesize_avatar(), synthesize_avatar());
    }

    #[test]
    fn test_avatar_voxel_count() {
        // legs 6, torso 9, arms 6, head 27, cap 9, sides 6, back 6, bangs 2
        assert_eq!(synthesize_avatar().len(), 71);
    }

    #[test]
    fn test_avatar_stands_on_ground_facing_forward() {
        let set = synthesize_avatar();
        let (min, max) = set.bounds().unwrap();
        assert_eq!(min.y, 0);
        assert_eq!(max.y, HEAD_TOP + 1);
        assert_eq!(set.get(IVec3::new(0, HEAD_TOP, 2)).unwrap().color, HAIR);
        assert!(!set.contains(IVec3::new(1, HEAD_TOP, 2)), "bangs leave one side open");
        assert_eq!(set.get(IVec3::new(1, 0, 0)).unwrap().color, SHOE);
        assert_eq!(set.get(IVec3::new(0, 7, 1)).unwrap().color, SKIN);
    }
}

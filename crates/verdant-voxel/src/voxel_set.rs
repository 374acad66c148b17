//! [`VoxelSet`]: an ordered, deduplicated collection of colored lattice cells.
//!
//! The first write to a cell wins. Later writes to an occupied cell are
//! dropped, which lets recipes layer shapes over each other without
//! bookkeeping.

use glam::IVec3;
use rustc_hash::FxHashMap;

use crate::Rgb;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which generative layer emitted a voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Stalks, trunks, stems, pots. Also used for every avatar cell.
    Structural,
    /// The body of the plant: leaves, canopy, foliage clouds.
    Mass,
    /// Flowers, bracts, spathes and other motifs.
    Ornament,
}

/// One colored cell on the integer lattice, local to its owning structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    /// Lattice X.
    pub x: i32,
    /// Lattice Y (up).
    pub y: i32,
    /// Lattice Z.
    pub z: i32,
    /// Cell color.
    pub color: Rgb,
    /// Layer that emitted the cell.
    pub layer: Layer,
}

impl Voxel {
    /// Lattice coordinate as a vector.
    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// VoxelSet
// ---------------------------------------------------------------------------

/// Ordered voxels with unique coordinates.
///
/// Iteration order is emission order and carries no meaning beyond that.
#[derive(Clone, Debug, Default)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
    /// Coordinate -> index into `voxels`.
    occupied: FxHashMap<IVec3, usize>,
}

impl VoxelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a cell. Returns `false` (and changes nothing) if the cell is
    /// already occupied.
    pub fn insert(&mut self, position: IVec3, color: Rgb, layer: Layer) -> bool {
        if self.occupied.contains_key(&position) {
            return false;
        }
        self.occupied.insert(position, self.voxels.len());
        self.voxels.push(Voxel {
            x: position.x,
            y: position.y,
            z: position.z,
            color,
            layer,
        });
        true
    }

    /// Number of voxels.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns `true` if no voxel has been written.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Returns `true` if the cell is occupied.
    pub fn contains(&self, position: IVec3) -> bool {
        self.occupied.contains_key(&position)
    }

    /// Returns the voxel occupying a cell, if any.
    pub fn get(&self, position: IVec3) -> Option<&Voxel> {
        self.occupied.get(&position).map(|&i| &self.voxels[i])
    }

    /// Iterates voxels in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    /// Number of voxels emitted by the given layer.
    pub fn layer_count(&self, layer: Layer) -> usize {
        self.voxels.iter().filter(|v| v.layer == layer).count()
    }

    /// Iterates the voxels emitted by the given layer.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Voxel> + '_ {
        self.voxels.iter().filter(move |v| v.layer == layer)
    }

    /// Inclusive lattice bounds `(min, max)`, or `None` for an empty set.
    pub fn bounds(&self) -> Option<(IVec3, IVec3)> {
        let first = self.voxels.first()?.position();
        Some(self.voxels.iter().fold((first, first), |(lo, hi), v| {
            let p = v.position();
            (lo.min(p), hi.max(p))
        }))
    }
}

impl PartialEq for VoxelSet {
    fn eq(&self, other: &Self) -> bool {
        self.voxels == other.voxels
    }
}

impl Eq for VoxelSet {}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::hex(0xff0000);
    const BLUE: Rgb = Rgb::hex(0x0000ff);

    #[test]
    fn test_first_writer_wins() {
        let mut set = VoxelSet::new();
        assert!(set.insert(IVec3::new(1, 2, 3), RED, Layer::Structural));
        assert!(!set.insert(IVec3::new(1, 2, 3), BLUE, Layer::Ornament));
        assert_eq!(set.len(), 1);
        let v = set.get(IVec3::new(1, 2, 3)).unwrap();
        assert_eq!(v.color, RED);
        assert_eq!(v.layer, Layer::Structural);
    }

    #[test]
    fn test_emission_order_preserved() {
        let mut set = VoxelSet::new();
        set.insert(IVec3::new(0, 5, 0), RED, Layer::Mass);
        set.insert(IVec3::new(0, 1, 0), RED, Layer::Mass);
        set.insert(IVec3::new(0, 3, 0), RED, Layer::Mass);
        let ys: Vec<i32> = set.iter().map(|v| v.y).collect();
        assert_eq!(ys, vec![5, 1, 3]);
    }

    #[test]
    fn test_bounds() {
        let mut set = VoxelSet::new();
        assert!(set.bounds().is_none());
        set.insert(IVec3::new(-2, 0, 4), RED, Layer::Mass);
        set.insert(IVec3::new(3, 7, -1), RED, Layer::Mass);
        assert_eq!(set.bounds(), Some((IVec3::new(-2, 0, -1), IVec3::new(3, 7, 4))));
    }

    #[test]
    fn test_layer_count() {
        let mut set = VoxelSet::new();
        set.insert(IVec3::ZERO, RED, Layer::Structural);
        set.insert(IVec3::X, RED, Layer::Ornament);
        set.insert(IVec3::Y, RED, Layer::Ornament);
        assert_eq!(set.layer_count(Layer::Structural), 1);
        assert_eq!(set.layer_count(Layer::Mass), 0);
        assert_eq!(set.layer_count(Layer::Ornament), 2);
        assert_eq!(set.layer(Layer::Ornament).count(), 2);
    }

    #[test]
    fn test_equality_ignores_index() {
        let mut a = VoxelSet::new();
        let mut b = VoxelSet::new();
        a.insert(IVec3::ZERO, RED, Layer::Mass);
        b.insert(IVec3::ZERO, RED, Layer::Mass);
        assert_eq!(a, b);
        b.insert(IVec3::ONE, RED, Layer::Mass);
        assert_ne!(a, b);
    }
}

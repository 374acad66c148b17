//! Which plant the avatar is close enough to inspect.

use glam::{Vec2, Vec3};
use verdant_catalog::GardenCatalog;
use verdant_locomotion::planar;

/// Index of the plant closest to `position` on the ground plane, if any lies
/// within `radius`. Equally close plants resolve to the earliest in catalog
/// order.
pub fn nearest_plant(catalog: &GardenCatalog, position: Vec3, radius: f32) -> Option<usize> {
    let here = planar(position);
    let mut best: Option<(usize, f32)> = None;
    for (index, plant) in catalog.plants().iter().enumerate() {
        let distance = here.distance(Vec2::new(plant.position.0, plant.position.1));
        if distance > radius {
            continue;
        }
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

use glam::Vec2;
use verdant_catalog::{GardenCatalog, PlantEntry};
use verdant_voxel::PlantCategory;

/// Below this length an offset has no usable direction.
const DEGENERATE_LENGTH: f32 = 1e-6;

/// Exclusion radius around a plant of the given category.
pub fn obstacle_radius(category: PlantCategory) -> f32 {
    match category {
        PlantCategory::BushFlower => 1.5,
        PlantCategory::BroadLeaf => 1.2,
        PlantCategory::TreeSmall => 1.0,
        PlantCategory::Vine => 0.8,
        _ => 0.8,
    }
}

/// Circular exclusion zone on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn for_plant(plant: &PlantEntry) -> Self {
        Self {
            center: Vec2::new(plant.position.0, plant.position.1),
            radius: obstacle_radius(plant.category),
        }
    }
}

/// Every obstacle of the garden, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CollisionField {
    obstacles: Vec<Obstacle>,
}

impl CollisionField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn from_catalog(catalog: &GardenCatalog) -> Self {
        Self::from_plants(catalog.plants())
    }

    pub fn from_plants<'a>(plants: impl IntoIterator<Item = &'a PlantEntry>) -> Self {
        Self::new(plants.into_iter().map(Obstacle::for_plant).collect())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Pushes `proposed` out of every obstacle it penetrates.
    ///
    /// One greedy pass in obstacle order: each correction starts from the
    /// previous one's result, and a later push may re-enter an earlier zone.
    /// A point exactly on an obstacle center is pushed along `+X`.
    pub fn resolve(&self, proposed: Vec2, avatar_radius: f32) -> Vec2 {
        let mut position = proposed;
        for obstacle in &self.obstacles {
            let reach = obstacle.radius + avatar_radius;
            let offset = position - obstacle.center;
            let distance = offset.length();
            if distance >= reach {
                continue;
            }
            let normal = if distance > DEGENERATE_LENGTH {
                offset / distance
            } else {
                Vec2::X
            };
            position = obstacle.center + normal * reach;
        }
        position
    }
}

//! Driver-owned garden state.

use glam::Vec3;
use tracing::{debug, info};
use verdant_catalog::GardenCatalog;
use verdant_config::Config;
use verdant_locomotion::{
    AvatarPose, AvatarState, CollisionField, LocomotionParams, MotionState, TickReport,
};
use verdant_voxel::{ColorPalette, CubeInstance, VoxelSet, synthesize_avatar};

use crate::{ShapeCache, nearest_plant};

/// Session tuning, usually taken from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub world_seed: u64,
    /// Edge length of one voxel cube in world units.
    pub cell_size: f32,
    pub locomotion: LocomotionParams,
    pub interaction_radius: f32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            world_seed: config.generation.world_seed,
            cell_size: config.generation.cell_size,
            locomotion: LocomotionParams::from(&config.locomotion),
            interaction_radius: config.proximity.interaction_radius,
        }
    }
}

/// Result of one [`GardenSession::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub pose: AvatarPose,
    pub state: MotionState,
    /// Catalog index of the plant the avatar is close enough to inspect.
    pub focused: Option<usize>,
    pub report: TickReport,
}

pub struct GardenSession {
    catalog: GardenCatalog,
    settings: SessionSettings,
    field: CollisionField,
    avatar: AvatarState,
    shapes: ShapeCache,
    avatar_shape: Option<VoxelSet>,
    focused: Option<usize>,
}

impl GardenSession {
    /// Plants the garden and places the avatar at the origin.
    pub fn new(catalog: GardenCatalog, settings: SessionSettings) -> Self {
        let field = CollisionField::from_catalog(&catalog);
        let avatar = AvatarState::new(Vec3::ZERO, settings.locomotion);
        let focused = nearest_plant(&catalog, Vec3::ZERO, settings.interaction_radius);
        info!(
            plants = catalog.len(),
            seed = settings.world_seed,
            "garden session started"
        );
        Self {
            catalog,
            settings,
            field,
            avatar,
            shapes: ShapeCache::new(),
            avatar_shape: None,
            focused,
        }
    }

    /// Sends the avatar toward `point`, replacing any earlier destination.
    pub fn set_target(&mut self, point: Vec3) {
        self.avatar.set_target(point);
    }

    /// Runs one locomotion tick followed by the proximity check.
    pub fn update(&mut self, dt: f32) -> FrameState {
        let report = self.avatar.tick(dt, &self.field);
        let pose = self.avatar.pose();
        let focused = nearest_plant(
            &self.catalog,
            pose.position,
            self.settings.interaction_radius,
        );
        if focused != self.focused {
            match focused.and_then(|i| self.catalog.get(i)) {
                Some(plant) => info!(plant = %plant.name, category = %plant.category, "focus"),
                None => debug!("focus cleared"),
            }
            self.focused = focused;
        }
        FrameState {
            pose,
            state: self.avatar.state(),
            focused,
            report,
        }
    }

    /// Voxel shape of the plant at `index`, synthesized on first request.
    pub fn plant_shape(&mut self, index: usize) -> Option<&VoxelSet> {
        let plant = self.catalog.get(index)?;
        Some(self.shapes.shape(index, plant, self.settings.world_seed))
    }

    /// Cube instances for the plant at `index`, placed at its garden position.
    pub fn plant_instances(&mut self, index: usize) -> Option<Vec<CubeInstance>> {
        let (x, z) = self.catalog.get(index)?.position;
        let cell_size = self.settings.cell_size;
        let shape = self.plant_shape(index)?;
        Some(shape.cube_instances(cell_size, Vec3::new(x, 0.0, z)))
    }

    /// Recolors a plant; its shape is regrown on the next request.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn replace_palette(&mut self, index: usize, palette: ColorPalette) -> bool {
        match self.catalog.get_mut(index) {
            Some(plant) => {
                debug!(plant = %plant.name, "palette replaced");
                plant.palette = palette;
                true
            }
            None => false,
        }
    }

    /// The avatar figure, built once.
    pub fn avatar_shape(&mut self) -> &VoxelSet {
        self.avatar_shape.get_or_insert_with(synthesize_avatar)
    }

    pub fn catalog(&self) -> &GardenCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn avatar(&self) -> &AvatarState {
        &self.avatar
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn shape_cache(&self) -> &ShapeCache {
        &self.shapes
    }
}

//! Headless garden driver: grows every plant, then walks the avatar on a tour
//! of the garden, logging what it sees.

use clap::Parser;
use glam::{Vec2, Vec3};
use tracing::{error, info, warn};
use verdant_catalog::{CatalogError, GardenCatalog};
use verdant_config::{CliArgs, Config, default_config_dir};
use verdant_locomotion::{MotionState, obstacle_radius};
use verdant_scene::{FixedStep, GardenSession, SessionSettings};
use verdant_voxel::Layer;

/// Simulated frame times, uneven on purpose, cycled during the tour.
const FRAME_TIMES: [f64; 6] = [0.016, 0.017, 0.033, 0.008, 0.021, 0.016];

/// How far short of a plant's exclusion zone the tour stops.
const VIEWING_GAP: f32 = 0.6;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    verdant_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load garden catalog: {e}");
            std::process::exit(1);
        }
    };

    let mut session = GardenSession::new(catalog, SessionSettings::from_config(&config));
    grow_garden(&mut session);
    tour_garden(&mut session, args.ticks);
}

fn load_catalog(config: &Config) -> Result<GardenCatalog, CatalogError> {
    match &config.catalog.path {
        Some(path) => GardenCatalog::load(path),
        None => {
            info!("No catalog configured, planting the built-in garden");
            Ok(GardenCatalog::builtin())
        }
    }
}

/// Synthesizes every plant and the avatar once, logging layer counts.
fn grow_garden(session: &mut GardenSession) {
    let avatar_voxels = session.avatar_shape().len();
    info!(voxels = avatar_voxels, "avatar built");

    for index in 0..session.catalog().len() {
        let Some(plant) = session.catalog().get(index).cloned() else {
            continue;
        };
        let Some(shape) = session.plant_shape(index) else {
            continue;
        };
        let bounds = shape.bounds();
        info!(
            plant = %plant.name,
            category = %plant.category,
            voxels = shape.len(),
            structural = shape.layer_count(Layer::Structural),
            mass = shape.layer_count(Layer::Mass),
            ornament = shape.layer_count(Layer::Ornament),
            height = bounds.map_or(0, |(min, max)| max.y - min.y + 1),
            "grew plant"
        );
        if let Some(instances) = session.plant_instances(index) {
            info!(plant = %plant.name, cubes = instances.len(), "instance buffer ready");
        }
    }
}

/// Walks to a viewing spot in front of each plant in turn, spending at most
/// `max_ticks` fixed steps in total.
fn tour_garden(session: &mut GardenSession, max_ticks: u32) {
    let stops: Vec<Vec3> = session
        .catalog()
        .plants()
        .iter()
        .map(|plant| {
            let center = Vec2::new(plant.position.0, plant.position.1);
            let reach = obstacle_radius(plant.category)
                + session.settings().locomotion.avatar_radius
                + VIEWING_GAP;
            let toward_origin = (-center).normalize_or(Vec2::X);
            let spot = center + toward_origin * reach;
            Vec3::new(spot.x, 0.0, spot.y)
        })
        .collect();

    let mut step = FixedStep::new();
    let mut frame = 0usize;
    for (index, stop) in stops.into_iter().enumerate() {
        session.set_target(stop);
        loop {
            if step.update_count() >= u64::from(max_ticks) {
                warn!(ticks = max_ticks, "tick budget spent, ending tour");
                return;
            }
            let frame_time = FRAME_TIMES[frame % FRAME_TIMES.len()];
            frame += 1;
            step.advance(frame_time, |dt| {
                session.update(dt as f32);
            });
            if session.avatar().state() == MotionState::Idle {
                break;
            }
        }
        let name = session
            .catalog()
            .get(index)
            .map_or("?", |plant| plant.name.as_str());
        info!(
            plant = name,
            focused = session.focused() == Some(index),
            sim_time = step.total_sim_time(),
            "reached viewing spot"
        );
    }
    info!(
        ticks = step.update_count(),
        frames = step.frame_count(),
        "tour complete"
    );
}

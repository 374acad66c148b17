//! Avatar state machine: walk toward the clicked point, slide around plants,
//! bob while walking.

use glam::{Vec2, Vec3};
use tracing::debug;
use verdant_config::LocomotionConfig;

use crate::{CollisionField, planar};

/// Below this planar length a target offset gives no heading.
const HEADING_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Seeking,
}

/// Tuning for the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionParams {
    /// Walking speed in world units per second.
    pub speed: f32,
    /// Avatar footprint radius added to every obstacle radius.
    pub avatar_radius: f32,
    /// Planar distance at which the target counts as reached.
    pub arrive_epsilon: f32,
    /// Peak vertical bob while walking.
    pub bob_amplitude: f32,
    /// Bob phase rate in radians per second.
    pub bob_frequency: f32,
}

impl Default for LocomotionParams {
    fn default() -> Self {
        Self::from(&LocomotionConfig::default())
    }
}

impl From<&LocomotionConfig> for LocomotionParams {
    fn from(config: &LocomotionConfig) -> Self {
        Self {
            speed: config.speed,
            avatar_radius: config.avatar_radius,
            arrive_epsilon: config.arrive_epsilon,
            bob_amplitude: config.bob_amplitude,
            bob_frequency: config.bob_frequency,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Planar movement actually committed.
    pub displacement: Vec2,
    /// Whether collision correction changed the proposed step.
    pub corrected: bool,
    /// Whether the avatar reached its target this tick.
    pub arrived: bool,
}

/// Resolved transform for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarPose {
    /// Logical position; the bob is not included.
    pub position: Vec3,
    /// Yaw in radians, `atan2(dx, dz)`, so zero faces `+Z`.
    pub heading: f32,
    /// Visual vertical offset.
    pub bob_offset: f32,
}

#[derive(Debug, Clone)]
pub struct AvatarState {
    position: Vec3,
    target: Option<Vec3>,
    state: MotionState,
    heading: f32,
    bob_phase: f32,
    bob_offset: f32,
    params: LocomotionParams,
}

impl AvatarState {
    pub fn new(position: Vec3, params: LocomotionParams) -> Self {
        Self {
            position,
            target: None,
            state: MotionState::Idle,
            heading: 0.0,
            bob_phase: 0.0,
            bob_offset: 0.0,
            params,
        }
    }

    /// Sets a new destination, replacing any previous one.
    pub fn set_target(&mut self, point: Vec3) {
        self.target = Some(point);
        let remaining = planar(point).distance(planar(self.position));
        self.state = if remaining > self.params.arrive_epsilon {
            MotionState::Seeking
        } else {
            MotionState::Idle
        };
        debug!(?point, remaining, state = ?self.state, "avatar target set");
    }

    /// Advances the avatar by `dt` seconds.
    pub fn tick(&mut self, dt: f32, field: &CollisionField) -> TickReport {
        let mut report = TickReport::default();
        let target = match (self.state, self.target) {
            (MotionState::Seeking, Some(target)) => planar(target),
            _ => {
                self.rest();
                return report;
            }
        };

        let start = planar(self.position);
        let to_target = target - start;
        let remaining = to_target.length();
        if remaining <= self.params.arrive_epsilon {
            self.arrive();
            report.arrived = true;
            return report;
        }

        let step = (self.params.speed * dt).min(remaining);
        let proposed = start + to_target / remaining * step;
        let resolved = field.resolve(proposed, self.params.avatar_radius);
        report.corrected = resolved != proposed;
        report.displacement = resolved - start;
        self.position.x = resolved.x;
        self.position.z = resolved.y;

        let offset = target - resolved;
        if offset.length() > HEADING_EPSILON {
            self.heading = offset.x.atan2(offset.y);
        }

        if offset.length() <= self.params.arrive_epsilon {
            self.arrive();
            report.arrived = true;
        } else {
            self.bob_phase += self.params.bob_frequency * dt;
            self.bob_offset = self.bob_phase.sin().abs() * self.params.bob_amplitude;
        }
        report
    }

    fn arrive(&mut self) {
        debug!(position = ?self.position, "avatar arrived");
        self.state = MotionState::Idle;
        self.rest();
    }

    fn rest(&mut self) {
        self.bob_phase = 0.0;
        self.bob_offset = 0.0;
    }

    pub fn pose(&self) -> AvatarPose {
        AvatarPose {
            position: self.position,
            heading: self.heading,
            bob_offset: self.bob_offset,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn params(&self) -> &LocomotionParams {
        &self.params
    }
}

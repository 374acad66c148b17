//! Point-and-click avatar locomotion across the garden floor.
//!
//! Movement is planar (x, z). Plants are circular exclusion zones; the avatar
//! walks straight at its target and gets pushed out of any zone it steps into.

mod collision;
mod motion;

pub use collision::{CollisionField, Obstacle, obstacle_radius};
pub use motion::{AvatarPose, AvatarState, LocomotionParams, MotionState, TickReport};

/// Projects a world position onto the ground plane.
pub fn planar(position: glam::Vec3) -> glam::Vec2 {
    glam::Vec2::new(position.x, position.z)
}

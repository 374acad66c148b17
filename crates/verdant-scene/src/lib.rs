//! The garden session: catalog, avatar, shape caches and plant focus, driven
//! one fixed step at a time.

mod cache;
mod fixed_step;
mod proximity;
mod session;

pub use cache::ShapeCache;
pub use fixed_step::{FIXED_DT, FixedStep, MAX_FRAME_TIME};
pub use proximity::nearest_plant;
pub use session::{FrameState, GardenSession, SessionSettings};

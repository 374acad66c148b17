//! Fixed-timestep accumulator for the garden simulation.
//!
//! Locomotion always advances in [`FIXED_DT`] steps no matter how uneven the
//! frame rate is; the leftover fraction is returned as an interpolation alpha.

use tracing::warn;

/// Simulation step: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longer frames are clamped to this, trading slowdown for a bounded number
/// of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

#[derive(Debug, Default)]
pub struct FixedStep {
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by an explicit `frame_time` in seconds, calling `update_fn`
    /// with [`FIXED_DT`] zero or more times.
    ///
    /// Returns the interpolation alpha in `[0, 1)`.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64)) -> f64 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }
        self.frame_count += 1;
        self.alpha()
    }

    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

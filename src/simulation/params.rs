//! Runtime parameters for the simulation
//!
//! `Parameters` holds the knobs the host may change while running:
//! - integration step size and sub-steps per tick,
//! - collision radius multiplier (visual/playability scale-up),
//! - trail cap and the trails on/off flag

use crate::configuration::config::ParametersConfig;
use crate::simulation::constants::{
    DEFAULT_COLLISION_RADIUS_MULTIPLIER, DEFAULT_DT, DEFAULT_STEPS_PER_FRAME, MAX_PATH_LENGTH,
};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,                          // fixed step size [s]
    pub steps_per_frame: u32,             // physics sub-steps per external tick
    pub collision_radius_multiplier: f64, // scale-up on the physical radius
    pub max_trail_length: usize,          // trail ring buffer cap
    pub trails_enabled: bool,             // false collapses trails to one point
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            collision_radius_multiplier: DEFAULT_COLLISION_RADIUS_MULTIPLIER,
            max_trail_length: MAX_PATH_LENGTH,
            trails_enabled: true,
        }
    }
}

impl From<ParametersConfig> for Parameters {
    fn from(cfg: ParametersConfig) -> Self {
        Self {
            dt: cfg.dt,
            steps_per_frame: cfg.steps_per_frame,
            collision_radius_multiplier: cfg.collision_radius_multiplier,
            max_trail_length: cfg.max_trail_length,
            trails_enabled: cfg.trails_enabled,
        }
    }
}

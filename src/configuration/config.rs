//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – runtime parameters (step size, trail cap, ...)
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A body is seeded either with explicit Cartesian state or with orbital
//! parameters resolved against the anchor (first) body:
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0                        # fixed step size [s]
//!   steps_per_frame: 6                # physics sub-steps per tick
//!   collision_radius_multiplier: 50.0 # visual scale-up on collision radii
//!   max_trail_length: 2000            # trail ring buffer cap
//!   trails_enabled: true
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     color: "#FFD700"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!   - name: Earth
//!     mass: 5.9724e24
//!     color: "#1E90FF"
//!     period_years: 1.0
//!     eccentricity: 0.0167
//! ```
//!
//! The `parameters` block may be omitted entirely to take the defaults.

use serde::Deserialize;

use crate::simulation::constants::{
    DEFAULT_COLLISION_RADIUS_MULTIPLIER, DEFAULT_DT, DEFAULT_STEPS_PER_FRAME, MAX_PATH_LENGTH,
};

/// Runtime parameters as they appear in YAML; every field is optional
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,                          // fixed step size [s]
    pub steps_per_frame: u32,             // physics sub-steps per tick
    pub collision_radius_multiplier: f64, // visual scale-up on collision radii
    pub max_trail_length: usize,          // trail ring buffer cap
    pub trails_enabled: bool,
}

impl Default for ParametersConfig {
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

/// How a body's initial state is specified
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum InitialStateConfig {
    /// Explicit position and velocity in SI units
    Cartesian { x: [f64; 2], v: [f64; 2] },
    /// Periapsis placement on a two-body orbit around the anchor body
    Orbit {
        period_years: f64,
        eccentricity: f64,
    },
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,     // mass [kg]; must be positive, validated at build time
    pub color: String, // opaque display token passed through to the host
    #[serde(flatten)]
    pub state: InitialStateConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // runtime parameters, defaulted when absent
    pub bodies: Vec<BodyConfig>, // initial state of the system
}

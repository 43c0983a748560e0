//! Core state types for the N-body engine
//!
//! Defines the body/world structs using `NVec2` (nalgebra `Vector2<f64>`):
//! - `Body`  holds physical state plus the derived display attributes and
//!   its own bounded trail buffer
//! - `World` holds the canonical body list and the elapsed simulation time
//!
//! Radius and display size are pure functions of mass and are recomputed
//! whenever mass changes (construction and merges).

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::error::{Result, SimError};
use crate::simulation::constants::{M_EARTH, M_MOON, M_SUN, MAX_BODY_SIZE, MIN_BODY_SIZE, R_EARTH};
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,           // display name, rewritten by merges
    pub m: f64,                 // mass, invariant: > 0
    pub x: NVec2,               // position
    pub v: NVec2,               // velocity
    pub a: NVec2,               // acceleration from the latest step
    pub color: String,          // opaque display token (hex string)
    pub radius: f64,            // physical collision radius, derived from mass
    pub size: f64,              // clamped log-scaled display size, derived from mass
    pub trail: VecDeque<NVec2>, // bounded position history, oldest evicted first
}

impl Body {
    /// Construct a body, rejecting non-positive or non-finite mass.
    /// The trail starts at the initial position.
    pub fn new(
        name: &str,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
        color: &str,
        radius_multiplier: f64,
    ) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidBody {
                name: name.to_string(),
                mass,
            });
        }
        Ok(Self::from_parts(
            name.to_string(),
            mass,
            position,
            velocity,
            color.to_string(),
            radius_multiplier,
        ))
    }

    /// Infallible constructor for masses already known to be valid
    /// (merge products: the sum of two positive masses)
    pub(crate) fn from_parts(
        name: String,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
        color: String,
        radius_multiplier: f64,
    ) -> Self {
        let mut body = Self {
            name,
            m: mass,
            x: position,
            v: velocity,
            a: NVec2::zeros(),
            color,
            radius: 0.0,
            size: 0.0,
            trail: VecDeque::from([position]),
        };
        body.update_radius_and_size(radius_multiplier);
        body
    }

    /// Recompute the derived quantities from the current mass:
    /// - radius = R_EARTH * (m / M_EARTH)^(1/3) * multiplier
    /// - size   = log10(m) interpolated between log10(M_MOON) and
    ///            log10(10 * M_SUN), clamped to [MIN_BODY_SIZE, MAX_BODY_SIZE]
    pub fn update_radius_and_size(&mut self, radius_multiplier: f64) {
        let base_radius = R_EARTH * (self.m / M_EARTH).powf(1.0 / 3.0);
        self.radius = base_radius * radius_multiplier;

        let log_mass = self.m.log10();
        let log_moon = M_MOON.log10();
        let log_sun = (10.0 * M_SUN).log10();
        let size = MIN_BODY_SIZE
            + (MAX_BODY_SIZE - MIN_BODY_SIZE) * (log_mass - log_moon) / (log_sun - log_moon);
        self.size = size.clamp(MIN_BODY_SIZE, MAX_BODY_SIZE);
    }

    /// Append the current position to the trail, evicting the oldest entry
    /// past the cap. When trails are off the trail collapses to one point.
    pub fn record_position(&mut self, params: &Parameters) {
        if params.trails_enabled {
            self.trail.push_back(self.x);
            if self.trail.len() > params.max_trail_length {
                self.trail.pop_front();
            }
        } else {
            self.collapse_trail();
        }
    }

    /// Drop all history, keeping only the current position
    pub fn collapse_trail(&mut self) {
        self.trail.clear();
        self.trail.push_back(self.x);
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Canonical simulation state: the body list plus elapsed simulation time.
/// `elapsed` only advances when this set is stepped as a whole; ghost and
/// preview copies are separate `World` values whose clocks die with them.
#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>,
    pub elapsed: f64,
}

impl World {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            elapsed: 0.0,
        }
    }
}

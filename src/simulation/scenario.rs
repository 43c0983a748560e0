//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - world state (`World` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Bodies may be seeded with explicit Cartesian state, or with orbital
//! parameters (period, eccentricity) resolved against the anchor body:
//! such a body is placed at periapsis along +x from the anchor with
//! periapsis speed along +y, relative to the anchor's own motion.

use crate::configuration::config::{BodyConfig, InitialStateConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::constants::{CUTOFF_DISTANCE, G, M_SUN};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::preview::derive_elements;
use crate::simulation::states::{Body, NVec2, World};

/// Default seed: the Sun plus the eight major planets, each started at
/// periapsis of an orbit with the given period and eccentricity.
/// (name, mass [kg], period [yr], eccentricity, color)
const SOLAR_PLANETS: [(&str, f64, f64, f64, &str); 8] = [
    ("Mercury", 3.3011e23, 0.241, 0.2056, "#A9A9A9"),
    ("Venus", 4.8675e24, 0.615, 0.0068, "#F4A460"),
    ("Earth", 5.9724e24, 1.0, 0.0167, "#1E90FF"),
    ("Mars", 6.4171e23, 1.881, 0.0934, "#FF4500"),
    ("Jupiter", 1.8982e27, 11.86, 0.0488, "#D2B48C"),
    ("Saturn", 5.6834e26, 29.45, 0.0557, "#F0E68C"),
    ("Uranus", 8.6810e25, 84.02, 0.0472, "#ADD8E6"),
    ("Neptune", 1.0241e26, 164.8, 0.0086, "#4682B4"),
];

/// Fully-initialized runtime bundle: parameters, world state and the set of
/// active force laws. This is what the driver steps and the preview engine
/// reads.
pub struct Scenario {
    pub parameters: Parameters,
    pub world: World,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters::from(cfg.parameters);

        // Bodies: map `BodyConfig` -> runtime `Body`, resolving orbital
        // seeds against the anchor (first) body
        let mut bodies: Vec<Body> = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let body = build_body(bc, bodies.first(), &parameters)?;
            bodies.push(body);
        }

        Ok(Self {
            parameters,
            world: World::new(bodies),
            forces: gravity_forces(),
        })
    }

    /// Built-in Sun + eight planets seed, no scenario file required
    pub fn solar_system() -> Result<Self> {
        let parameters = Parameters::default();

        let sun = Body::new(
            "Sun",
            M_SUN,
            NVec2::zeros(),
            NVec2::zeros(),
            "#FFD700",
            parameters.collision_radius_multiplier,
        )?;

        let mut bodies = vec![sun];
        for (name, mass, period, eccentricity, color) in SOLAR_PLANETS {
            let body = orbit_seeded_body(
                name,
                mass,
                period,
                eccentricity,
                color,
                &bodies[0],
                &parameters,
            )?;
            bodies.push(body);
        }

        Ok(Self {
            parameters,
            world: World::new(bodies),
            forces: gravity_forces(),
        })
    }
}

/// The engine's standing force set: direct Newtonian gravity with the
/// near-contact cutoff
fn gravity_forces() -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: G,
        cutoff: CUTOFF_DISTANCE,
    })
}

fn build_body(bc: &BodyConfig, anchor: Option<&Body>, params: &Parameters) -> Result<Body> {
    match &bc.state {
        InitialStateConfig::Cartesian { x, v } => Body::new(
            &bc.name,
            bc.mass,
            NVec2::new(x[0], x[1]),
            NVec2::new(v[0], v[1]),
            &bc.color,
            params.collision_radius_multiplier,
        ),
        InitialStateConfig::Orbit {
            period_years,
            eccentricity,
        } => {
            let anchor = anchor.ok_or_else(|| {
                SimError::InvalidScenario(format!(
                    "body {:?} is orbit-seeded but there is no anchor body before it",
                    bc.name
                ))
            })?;
            orbit_seeded_body(
                &bc.name,
                bc.mass,
                *period_years,
                *eccentricity,
                &bc.color,
                anchor,
                params,
            )
        }
    }
}

/// Place a body at periapsis of a two-body orbit around `anchor`:
/// position offset (r_p, 0), velocity offset (0, v_p), both relative to the
/// anchor's state
fn orbit_seeded_body(
    name: &str,
    mass: f64,
    period_years: f64,
    eccentricity: f64,
    color: &str,
    anchor: &Body,
    params: &Parameters,
) -> Result<Body> {
    let elements = derive_elements(anchor.m, mass, period_years, eccentricity)?;
    Body::new(
        name,
        mass,
        anchor.x + NVec2::new(elements.r_p, 0.0),
        anchor.v + NVec2::new(0.0, elements.v_p),
        color,
        params.collision_radius_multiplier,
    )
}

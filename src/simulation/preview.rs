//! Speculative orbit previews
//!
//! Given a reference body and trial orbital parameters (mass, period,
//! eccentricity), derives a candidate body from two-body Kepler mechanics
//! and a projected path in one of two modes:
//!
//! - paused:  sample the analytic ellipse (no time passes, the ellipse is
//!   exact for the two-body problem)
//! - running: clone the whole world plus the trial body into a disposable
//!   ghost set and forward-integrate it with the same Verlet/gravity code,
//!   so the path reflects perturbation from every existing body
//!
//! Nothing here mutates the canonical world; committing a preview is an
//! explicit host decision.

use std::f64::consts::PI;

use crate::error::{Result, SimError};
use crate::simulation::constants::{CUTOFF_DISTANCE, G, PREVIEW_SAMPLES, PREVIEW_STEP_CAP, YEAR};
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Trial parameters for a not-yet-committed body
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub mass: f64,         // trial mass [kg]
    pub period_years: f64, // trial orbital period [yr]
    pub eccentricity: f64, // 0 = circular, must stay below 1
    pub color: String,     // display token; hosts typically cycle PLANET_COLORS
}

/// Two-body orbital elements derived from (mass, period, eccentricity)
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    pub a: f64,   // semi-major axis [m]
    pub r_p: f64, // periapsis distance [m]
    pub v_p: f64, // periapsis speed [m/s]
}

/// Disposable preview output: the candidate body and its projected path.
/// Recomputed whenever inputs change; never folded into the world directly.
#[derive(Debug, Clone)]
pub struct PreviewResult {
    pub body: Body,
    pub path: Vec<NVec2>,
}

/// Derive semi-major axis, periapsis distance and periapsis speed for a
/// two-body orbit of combined mass `m_center + m_new`:
///
/// - Kepler III:  a = (G * M_total * T^2 / 4 pi^2)^(1/3)
/// - periapsis:   r_p = a * (1 - e)
/// - vis-viva:    v_p = sqrt(G * M_total * (2 / r_p - 1 / a))
///
/// Rejects parameters outside the elliptical domain before any NaN or
/// infinity can leak into the world.
pub fn derive_elements(
    m_center: f64,
    m_new: f64,
    period_years: f64,
    eccentricity: f64,
) -> Result<OrbitalElements> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(SimError::DegenerateOrbit(format!(
            "eccentricity {eccentricity} is outside [0, 1)"
        )));
    }
    if !(period_years > 0.0) {
        return Err(SimError::DegenerateOrbit(format!(
            "period {period_years} yr is not positive"
        )));
    }

    let t = period_years * YEAR;
    let m_total = m_center + m_new;
    let a = (G * m_total * t * t / (4.0 * PI * PI)).powf(1.0 / 3.0);
    let r_p = a * (1.0 - eccentricity);
    if !(r_p > 0.0) {
        return Err(SimError::DegenerateOrbit(format!(
            "periapsis {r_p} m is not positive"
        )));
    }
    let v_p = (G * m_total * (2.0 / r_p - 1.0 / a)).sqrt();

    Ok(OrbitalElements { a, r_p, v_p })
}

/// Compute a speculative body and projected path around the body at
/// `center_index`. Reads the world, never writes it.
pub fn compute_preview(
    world: &World,
    center_index: usize,
    request: &PreviewRequest,
    paused: bool,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<PreviewResult> {
    let center = world
        .bodies
        .get(center_index)
        .ok_or(SimError::MissingBody {
            index: center_index,
        })?;
    let anchor = world.bodies.first().ok_or(SimError::MissingBody { index: 0 })?;

    let elements = derive_elements(
        center.m,
        request.mass,
        request.period_years,
        request.eccentricity,
    )?;

    // Orbital frame: radial unit vector from the anchor toward the center
    // body, with an arbitrary fallback when the center sits at the anchor
    let mut dir = center.x - anchor.x;
    if dir.norm() < CUTOFF_DISTANCE {
        dir = NVec2::new(1.0, 0.0);
    } else {
        dir /= dir.norm();
    }
    let perp = NVec2::new(-dir.y, dir.x);

    // Place the trial body at periapsis, moving perpendicular at periapsis
    // speed relative to the (possibly moving) center body
    let position = center.x + dir * elements.r_p;
    let velocity = center.v + perp * elements.v_p;

    let body = Body::new(
        "(preview)",
        request.mass,
        position,
        velocity,
        &request.color,
        params.collision_radius_multiplier,
    )?;

    let path = if paused {
        analytic_ellipse_path(center.x, dir, perp, &elements, request.eccentricity)
    } else {
        ghost_path(world, &body, forces, params, request.period_years)
    };

    Ok(PreviewResult { body, path })
}

/// Sample the exact two-body ellipse in the orbital frame and translate it
/// to the center body's current position. Used while paused, when the world
/// is frozen and the ellipse stays valid.
fn analytic_ellipse_path(
    center_pos: NVec2,
    dir: NVec2,
    perp: NVec2,
    elements: &OrbitalElements,
    eccentricity: f64,
) -> Vec<NVec2> {
    let a = elements.a;
    let c = a * eccentricity; // linear eccentricity: focus offset
    let b = a * (1.0 - eccentricity * eccentricity).sqrt(); // semi-minor axis

    let mut path = Vec::with_capacity(PREVIEW_SAMPLES + 1);
    for i in 0..=PREVIEW_SAMPLES {
        let angle = 2.0 * PI * i as f64 / PREVIEW_SAMPLES as f64;
        // Ellipse with the occupied focus at the local origin, periapsis
        // toward +x (angle 0 lands exactly on the trial body's position)
        let ex = a * angle.cos() - c;
        let ey = b * angle.sin();
        let rx = ex * dir.x - ey * perp.x;
        let ry = ex * dir.y + ey * perp.y;
        path.push(NVec2::new(center_pos.x + rx, center_pos.y + ry));
    }
    path
}

/// Forward-integrate a disposable clone of the world plus the trial body,
/// recording the trial body's position each step. The trial body perturbs
/// the ghost copies (and is perturbed by them), which is the point: the
/// path shows what would really happen. Bounded by `PREVIEW_STEP_CAP`; the
/// ghost world's own clock is discarded along with it.
fn ghost_path(
    world: &World,
    trial: &Body,
    forces: &AccelSet,
    params: &Parameters,
    period_years: f64,
) -> Vec<NVec2> {
    let mut ghost = world.clone();
    ghost.bodies.push(trial.clone());
    let trial_index = ghost.bodies.len() - 1;

    let period = period_years * YEAR;
    let steps = ((period / params.dt).floor() as usize).min(PREVIEW_STEP_CAP);

    let mut path = Vec::with_capacity(steps);
    for _ in 0..steps {
        verlet_step(&mut ghost, forces, params);
        path.push(ghost.bodies[trial_index].x);
    }
    path
}

/// Promote a preview into the canonical world under a host-chosen name.
/// The speculative path is dropped; the committed body starts a fresh trail.
pub fn commit_preview(world: &mut World, preview: &PreviewResult, name: &str) {
    let mut body = preview.body.clone();
    body.name = name.to_string();
    body.collapse_trail();
    world.bodies.push(body);
}

//! Fixed-step velocity-Verlet integration
//!
//! Symplectic kick-drift-kick stepping with two force evaluations per step.
//! Verlet bounds long-term energy drift, which is what keeps orbits from
//! visibly decaying or blowing up in a simulation meant to run indefinitely.
//! The step size is fixed; there is no adaptive control.

use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Advance a self-gravitating world by one step of velocity-Verlet and
/// record trail positions. Advances `world.elapsed` by `dt`.
pub fn verlet_step(world: &mut World, forces: &AccelSet, params: &Parameters) {
    let n = world.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;
    let half_dt = 0.5 * dt;

    // a_n from x_n: every body is both a target and a source here
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&world.bodies, &world.bodies, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in world.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in world.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // a_n+1 from the updated positions x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&world.bodies, &world.bodies, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    // Keep a_n+1 on the body for the host (display, diagnostics)
    for (b, a) in world.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
        b.a = *a;
    }

    // Trail bookkeeping after the state is final for this step
    for b in world.bodies.iter_mut() {
        b.record_position(params);
    }

    world.elapsed += dt;
}

/// Advance `targets` by one Verlet step under the gravity of `sources`
/// only. Targets do not pull on each other or on the sources, and no clock
/// is advanced: this is how a speculative body rides along with a running
/// simulation without perturbing it.
pub fn verlet_step_ghost(
    targets: &mut [Body],
    sources: &[Body],
    forces: &AccelSet,
    params: &Parameters,
) {
    let n = targets.len();
    if n == 0 {
        return;
    }

    let dt = params.dt;
    let half_dt = 0.5 * dt;

    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(targets, sources, &mut a_old);

    for (b, a) in targets.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }
    for b in targets.iter_mut() {
        b.x += dt * b.v;
    }

    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(targets, sources, &mut a_new);

    for (b, a) in targets.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
        b.a = *a;
    }
    for b in targets.iter_mut() {
        b.record_position(params);
    }
}

//! Tick driver: the integrate-then-resolve loop
//!
//! The host calls [`step`] once per animation tick; the engine runs
//! `steps_per_frame` physics sub-steps, each one Verlet step followed by a
//! collision resolution pass over the canonical bodies. Strictly
//! sequential: step t+1 depends on step t.

use crate::simulation::collisions::{resolve_collisions, CollisionEvent};
use crate::simulation::integrator::{verlet_step, verlet_step_ghost};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

/// Everything that happened during one external tick.
/// `removals` has one entry per sub-step in which collisions occurred; the
/// indices refer to the body list as it stood at the start of that
/// sub-step, so the host can repair index-based state such as a selection.
#[derive(Debug, Default)]
pub struct StepReport {
    pub events: Vec<CollisionEvent>,
    pub removals: Vec<Vec<usize>>,
}

/// Advance the canonical world by one tick (`steps_per_frame` sub-steps)
pub fn step(scenario: &mut Scenario) -> StepReport {
    step_with_marker(scenario, None)
}

/// Like [`step`], but an uncommitted preview marker rides along: after each
/// sub-step it is integrated as a pure target against the canonical bodies,
/// feeling their gravity without exerting any. Collisions are only
/// evaluated among canonical bodies, never against the marker.
pub fn step_with_marker(scenario: &mut Scenario, mut marker: Option<&mut Body>) -> StepReport {
    let mut report = StepReport::default();

    for _ in 0..scenario.parameters.steps_per_frame {
        verlet_step(
            &mut scenario.world,
            &scenario.forces,
            &scenario.parameters,
        );

        if let Some(m) = marker.as_deref_mut() {
            verlet_step_ghost(
                std::slice::from_mut(m),
                &scenario.world.bodies,
                &scenario.forces,
                &scenario.parameters,
            );
        }

        let outcome = resolve_collisions(&mut scenario.world, &scenario.parameters);
        if !outcome.removed.is_empty() {
            report.removals.push(outcome.removed);
        }
        report.events.extend(outcome.events);
    }

    report
}

/// Flip trail recording. Disabling clears every trail down to the current
/// position so stale history never lingers.
pub fn set_trails_enabled(scenario: &mut Scenario, enabled: bool) {
    scenario.parameters.trails_enabled = enabled;
    if !enabled {
        for body in &mut scenario.world.bodies {
            body.collapse_trail();
        }
    }
}

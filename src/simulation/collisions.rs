//! Pairwise collision detection and perfectly inelastic merging
//!
//! Each resolution pass scans unordered index pairs (i, j) with i < j in
//! order; a pair collides when the separation is under the sum of the
//! collision radii. Both members are consumed and replaced by a single
//! momentum-conserving merged body. A body can only merge once per pass:
//! when three or more bodies overlap, the first-found pair (in index order)
//! wins and the rest wait for the next step. This tie-break is part of the
//! observable behavior and deliberately not priority-by-mass.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, World};

/// Transient merge notification for the host's effects layer.
/// `energy_lost` is the kinetic energy destroyed by the inelastic merge,
/// non-negative for any valid input pair.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    pub position: NVec2,
    pub energy_lost: f64,
}

/// Result of one resolution pass.
/// `removed` holds the indices (into the pre-pass body list, sorted
/// descending) that were consumed, so the host can fix up anything it
/// tracks by index, e.g. reset its selection.
#[derive(Debug, Default)]
pub struct CollisionOutcome {
    pub removed: Vec<usize>,
    pub events: Vec<CollisionEvent>,
}

/// Merge-naming ladder: X -> "Giant X" -> "Super X".
/// "Super" replaces "Giant" rather than stacking on top of it, and a name
/// that already reached "Super" stops growing.
fn merge_name(base: &str) -> String {
    if base.starts_with("Super ") {
        base.to_string()
    } else if let Some(rest) = base.strip_prefix("Giant ") {
        format!("Super {rest}")
    } else {
        format!("Giant {base}")
    }
}

/// Detect and resolve all collisions among the canonical bodies, rebuilding
/// the list with survivors first (original order) and merged bodies appended
/// in the order the collisions were found.
pub fn resolve_collisions(world: &mut World, params: &Parameters) -> CollisionOutcome {
    let n = world.bodies.len();
    let mut consumed = vec![false; n];
    let mut merged: Vec<Body> = Vec::new();
    let mut outcome = CollisionOutcome::default();

    for i in 0..n {
        for j in (i + 1)..n {
            // First-found pairing wins; a body cannot merge twice per pass
            if consumed[i] || consumed[j] {
                continue;
            }

            let b1 = &world.bodies[i];
            let b2 = &world.bodies[j];
            if (b1.x - b2.x).norm() >= b1.radius + b2.radius {
                continue;
            }

            let (m1, m2) = (b1.m, b2.m);
            let new_mass = m1 + m2;

            // Momentum-conserving velocity and mass-weighted centroid
            let new_vel = (m1 * b1.v + m2 * b2.v) / new_mass;
            let new_pos = (m1 * b1.x + m2 * b2.x) / new_mass;

            // KE destroyed by the inelastic merge
            let ke_before = b1.kinetic_energy() + b2.kinetic_energy();
            let ke_after = 0.5 * new_mass * new_vel.norm_squared();
            let energy_lost = ke_before - ke_after;

            // The heavier body supplies name and color; ties favor i
            let base = if m1 >= m2 { b1 } else { b2 };
            let new_body = Body::from_parts(
                merge_name(&base.name),
                new_mass,
                new_pos,
                new_vel,
                base.color.clone(),
                params.collision_radius_multiplier,
            );

            merged.push(new_body);
            outcome.events.push(CollisionEvent {
                position: new_pos,
                energy_lost,
            });
            consumed[i] = true;
            consumed[j] = true;
            outcome.removed.push(i);
            outcome.removed.push(j);
        }
    }

    if !outcome.removed.is_empty() {
        outcome.removed.sort_unstable_by(|a, b| b.cmp(a));

        let old = std::mem::take(&mut world.bodies);
        world.bodies = old
            .into_iter()
            .enumerate()
            .filter(|(k, _)| !consumed[*k])
            .map(|(_, b)| b)
            .collect();
        world.bodies.extend(merged);
    }

    outcome
}

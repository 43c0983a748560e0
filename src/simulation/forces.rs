//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait over two body collections, and direct
//! Newtonian gravity with a hard short-range cutoff.
//!
//! The two-collection contract is what makes previews cheap: a speculative
//! body can appear in `targets` (it feels gravity) without appearing in
//! `sources` (it pulls on nothing), so the force kernel stays a pure
//! function and nothing needs a per-body "is ghost" flag.

use crate::simulation::states::{Body, NVec2};

/// Collection of acceleration terms (gravity today, drag or thrust later)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per target body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `targets` under the
    /// pull of `sources`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - pass the same slice twice for ordinary self-gravitating stepping
    pub fn accumulate_accels(&self, targets: &[Body], sources: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(targets, sources, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on a target/source body split
/// Implementations add their contribution into `out[i]` for each target
pub trait Acceleration {
    fn acceleration(&self, targets: &[Body], sources: &[Body], out: &mut [NVec2]);
}

/// Direct O(|targets| * |sources|) Newtonian gravity with a cutoff
///
/// Pairs separated by `cutoff` or less contribute nothing for that step.
/// Unlike eps^2 softening, this drops the near-contact force entirely:
/// slightly wrong physics at extreme close range, in exchange for never
/// evaluating a singular 1/r^2 at near-zero separation. The collision
/// resolver merges overlapping bodies long before this matters.
pub struct NewtonianGravity {
    pub g: f64,      // gravitational constant
    pub cutoff: f64, // minimum separation for a pair to interact
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, targets: &[Body], sources: &[Body], out: &mut [NVec2]) {
        for (i, target) in targets.iter().enumerate() {
            for source in sources.iter() {
                // Skip self-interaction by identity, not value: the same
                // body may sit in both slices when stepping a whole world
                if std::ptr::eq(target, source) {
                    continue;
                }

                // r points from the target toward the source, so the
                // contribution below pulls the target inward
                let r = source.x - target.x;
                let dist = r.norm();

                // Hard cutoff: near-contact pairs are silently excluded
                if dist <= self.cutoff {
                    continue;
                }

                // a_i += G * m_src * r / |r|^3
                // (unit vector r/|r| combined with 1/|r|^2 into one factor)
                let coef = self.g * source.m / (dist * dist * dist);
                out[i] += coef * r;
            }
        }
    }
}

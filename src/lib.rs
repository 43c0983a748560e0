pub mod configuration;
pub mod error;
pub mod simulation;

pub use error::{Result, SimError};

pub use simulation::collisions::{resolve_collisions, CollisionEvent, CollisionOutcome};
pub use simulation::engine::{set_trails_enabled, step, step_with_marker, StepReport};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{verlet_step, verlet_step_ghost};
pub use simulation::params::Parameters;
pub use simulation::preview::{
    commit_preview, compute_preview, derive_elements, OrbitalElements, PreviewRequest,
    PreviewResult,
};
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, NVec2, World};

pub use configuration::config::{BodyConfig, InitialStateConfig, ParametersConfig, ScenarioConfig};

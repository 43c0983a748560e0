pub mod collisions;
pub mod constants;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod preview;
pub mod scenario;
pub mod states;

//! Error types for the engine
//!
//! Two conditions are first-class: constructing a body with an unusable mass,
//! and preview parameters that do not describe an ellipse. Everything else
//! (config file trouble, bad indices) is boundary plumbing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Mass must be strictly positive and finite; radius and display size
    /// are log/cube-root functions of it and blow up otherwise
    #[error("body {name:?} must have positive finite mass, got {mass}")]
    InvalidBody { name: String, mass: f64 },

    /// Preview parameters left the elliptical domain (e outside [0, 1),
    /// or a non-positive periapsis). Recoverable: report, do not propagate NaN
    #[error("degenerate orbit: {0}")]
    DegenerateOrbit(String),

    /// Referenced a body index that is not in the world
    #[error("no body at index {index}")]
    MissingBody { index: usize },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

//! Process-wide physical and display constants
//!
//! Fixed at startup; the only knob meant to be touched at runtime is the
//! collision radius multiplier, which lives in `Parameters` instead.

/// Gravitational constant [m^3 kg^-1 s^-2]
pub const G: f64 = 6.67430e-11;

/// Solar mass [kg]
pub const M_SUN: f64 = 1.989e30;
/// Earth mass [kg], reference for the radius law
pub const M_EARTH: f64 = 5.972e24;
/// Lunar mass [kg], lower anchor of the display-size scale
pub const M_MOON: f64 = 7.342e22;
/// Earth radius [m], reference for the radius law
pub const R_EARTH: f64 = 6.371e6;

/// Astronomical unit [m]
pub const AU: f64 = 1.496e11;
/// Julian year [s]
pub const YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Pairs closer than this contribute no gravity at all. A hard cutoff, not
/// an eps^2 smoothing: near-contact force is dropped for that step
pub const CUTOFF_DISTANCE: f64 = 1e6;

/// Trail ring buffer cap (positions per body)
pub const MAX_PATH_LENGTH: usize = 2000;

/// Display-size clamp range, in screen units owned by the host layer
pub const MIN_BODY_SIZE: f64 = 2.0;
pub const MAX_BODY_SIZE: f64 = 25.0;

/// Default fixed timestep [s] (one hour)
pub const DEFAULT_DT: f64 = 3600.0;
/// Default physics sub-steps per external tick
pub const DEFAULT_STEPS_PER_FRAME: u32 = 6;
/// Artistic scale-up of the physical collision radius for playability
pub const DEFAULT_COLLISION_RADIUS_MULTIPLIER: f64 = 50.0;

/// Angular samples of the analytic preview ellipse (path gets samples + 1 points)
pub const PREVIEW_SAMPLES: usize = 200;
/// Upper bound on ghost-world steps per preview recomputation
pub const PREVIEW_STEP_CAP: usize = 5000;

/// Color cycle for committed preview planets
pub const PLANET_COLORS: [&str; 12] = [
    "#FF7F50", "#6A5ACD", "#00FA9A", "#FF69B4", "#1E90FF", "#FFD700",
    "#ADFF2F", "#F08080", "#BA55D3", "#7B68EE", "#3CB371", "#FFA07A",
];

//! Tuning constants for the field laws
//!
//! These are visualization-scale values, not physical constants. They are
//! chosen so every field kind produces visible, stable motion at ~60 steps
//! per second.

/// Softening term added to r² in the central-force denominators.
/// Prevents the force from blowing up as r → 0.
pub const SOFTENING: f32 = 1.0;

/// Inside this radius the central forces (gravity, electric) return zero.
pub const SINGULARITY_RADIUS: f32 = 0.1;

/// Below this radius the wave field skips its radial term (direction is
/// undefined at the origin); the planar perturbation still applies.
pub const WAVE_RADIAL_MIN: f32 = 0.01;

/// Exponential falloff rate of the wave field's radial term.
pub const WAVE_FALLOFF: f32 = 0.1;

/// Scale of the wave field's per-axis perturbation relative to its amplitude.
pub const WAVE_PERTURBATION: f32 = 0.1;

/// Scale applied to the magnetic v × r term.
pub const MAGNETIC_SCALE: f32 = 0.1;

/// Scale applied to the quantum wave-vector term.
pub const QUANTUM_SCALE: f32 = 0.1;

/// Scale applied to the quantum fluctuation term.
pub const FLUCTUATION_SCALE: f32 = 0.01;

/// Half-extent of the simulation cube enforced by the boundary policies.
pub const BOUNDARY_EXTENT: f32 = 15.0;

/// Velocity retained per elastic bounce (energy loss on reflection).
pub const BOUNCE_DAMPING: f32 = 0.7;

/// Particle masses are sampled uniformly from this range.
pub const MASS_MIN: f32 = 0.1;
pub const MASS_MAX: f32 = 1.0;

/// Maximum grid-cell jitter applied at particle placement, as a fraction of
/// one cell's width.
pub const JITTER_FRACTION: f32 = 0.4;

/// Speed-to-brightness factor for velocity-tinted colors.
pub const SPEED_BRIGHTNESS: f32 = 0.05;

/// Cap on the velocity brightness boost.
pub const BRIGHTNESS_CAP: f32 = 0.5;

/// Default force-cache validity window, one 60 Hz frame of simulation time.
pub const FRAME_WINDOW: f32 = 0.016;

//! Particle state for the field simulation

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One simulated point mass.
///
/// Laid out as `repr(C)` plain-old-data in 16-byte rows so the whole particle
/// array can be uploaded verbatim to a GPU buffer by an external renderer.
/// The renderer only reads `position` and `color`; everything else is
/// simulation state.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Mass, always > 0 (enforced at creation by the store)
    pub mass: f32,

    /// Velocity vector
    pub velocity: [f32; 3],
    pub _pad0: f32,

    /// RGB color, each channel in [0, 1]
    pub color: [f32; 3],
    pub _pad1: f32,
}

impl Particle {
    /// Create a particle at rest with the given position, mass and color.
    pub fn at_rest(position: Vec3, mass: f32, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            mass,
            velocity: [0.0; 3],
            _pad0: 0.0,
            color,
            _pad1: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::from_array(self.velocity)
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity.to_array();
    }

    pub fn speed(&self) -> f32 {
        self.velocity().length()
    }

    /// True when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.position().is_finite()
            && self.velocity().is_finite()
            && self.mass.is_finite()
            && self.color.iter().all(|c| c.is_finite())
    }
}

//! Field parameters and simulation bounds
//!
//! One flat struct carries every per-kind knob; each field kind only reads
//! the parameters relevant to its laws. Validation runs once at
//! configuration time, never in the per-frame path.

use glam::Vec3;

use crate::error::{ConfigError, Result};
use crate::field::FieldKind;

/// Numeric knobs for all field kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Gravity: pull strength toward the origin.
    pub gravity_strength: f32,
    /// Magnetic: scale of the v × r force.
    pub magnetic_strength: f32,
    /// Electric: radial force strength.
    pub electric_strength: f32,
    /// Electric: only the sign matters — positive repels, negative
    /// attracts, and a zero charge feels no electric force at all.
    pub charge: f32,
    /// Wave: oscillation amplitude.
    pub wave_amplitude: f32,
    /// Wave: oscillation frequency in Hz.
    pub wave_frequency: f32,
    /// Wave: radial wavelength, must be > 0.
    pub wave_wavelength: f32,
    /// Quantum: wave-vector force strength.
    pub quantum_strength: f32,
    /// Quantum: amplitude of the deterministic fluctuation term.
    pub quantum_fluctuation: f32,
    /// Quantum: phase frequency in Hz.
    pub quantum_frequency: f32,
    /// Quantum: fixed wave vector (kx, ky, kz).
    pub wave_vector: [f32; 3],
    /// Quantum: Gaussian packet width, must be > 0.
    pub packet_width: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            gravity_strength: 10.0,
            magnetic_strength: 5.0,
            electric_strength: 8.0,
            charge: 1.0,
            wave_amplitude: 2.0,
            wave_frequency: 0.5,
            wave_wavelength: 5.0,
            quantum_strength: 3.0,
            quantum_fluctuation: 1.0,
            quantum_frequency: 1.0,
            wave_vector: [1.0, 1.0, 1.0],
            packet_width: 5.0,
        }
    }
}

impl FieldParams {
    /// Default slider values for a given field kind, tuned so each kind shows
    /// visible motion out of the box.
    pub fn preset(kind: FieldKind) -> Self {
        let mut params = Self::default();
        match kind {
            FieldKind::Gravity => params.gravity_strength = 10.0,
            FieldKind::Magnetic => params.magnetic_strength = 8.0,
            FieldKind::Electric => {
                params.electric_strength = 8.0;
                params.charge = 1.0;
            }
            FieldKind::Wave => {
                params.wave_amplitude = 3.0;
                params.wave_frequency = 0.5;
                params.wave_wavelength = 4.0;
            }
            FieldKind::Quantum => {
                params.quantum_strength = 5.0;
                params.quantum_fluctuation = 2.0;
                params.wave_vector = [1.0, 0.5, 0.8];
                params.packet_width = 6.0;
            }
        }
        params
    }

    /// Reject non-finite values and zero-width denominators once, at
    /// configuration time.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("gravity_strength", self.gravity_strength),
            ("magnetic_strength", self.magnetic_strength),
            ("electric_strength", self.electric_strength),
            ("charge", self.charge),
            ("wave_amplitude", self.wave_amplitude),
            ("wave_frequency", self.wave_frequency),
            ("wave_wavelength", self.wave_wavelength),
            ("quantum_strength", self.quantum_strength),
            ("quantum_fluctuation", self.quantum_fluctuation),
            ("quantum_frequency", self.quantum_frequency),
            ("wave_vector.x", self.wave_vector[0]),
            ("wave_vector.y", self.wave_vector[1]),
            ("wave_vector.z", self.wave_vector[2]),
            ("packet_width", self.packet_width),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::Params(format!("{name} is not finite")));
            }
        }
        if self.wave_wavelength <= 0.0 {
            return Err(ConfigError::Params(
                "wave_wavelength must be positive".into(),
            ));
        }
        if self.packet_width <= 0.0 {
            return Err(ConfigError::Params("packet_width must be positive".into()));
        }
        Ok(())
    }

    /// The sign of the charge, with zero (of either sign) mapping to 0.
    pub fn charge_sign(&self) -> f32 {
        if self.charge == 0.0 {
            0.0
        } else {
            self.charge.signum()
        }
    }

    /// The parameter magnitudes a given kind's force law actually reads,
    /// padded to a fixed width. Used to build coarse force-cache keys.
    pub fn relevant(&self, kind: FieldKind) -> [f32; 7] {
        match kind {
            FieldKind::Gravity => [self.gravity_strength, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            FieldKind::Magnetic => [self.magnetic_strength, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            FieldKind::Electric => [
                self.electric_strength,
                self.charge_sign(),
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
            ],
            FieldKind::Wave => [
                self.wave_amplitude,
                self.wave_frequency,
                self.wave_wavelength,
                0.0,
                0.0,
                0.0,
                0.0,
            ],
            FieldKind::Quantum => [
                self.quantum_strength,
                self.quantum_fluctuation,
                self.quantum_frequency,
                self.wave_vector[0],
                self.wave_vector[1],
                self.wave_vector[2],
                self.packet_width,
            ],
        }
    }
}

/// Axis-aligned placement cube for the particle store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Cube centered on the origin with the given half-extent.
    pub fn centered(half_extent: f32) -> Self {
        Self {
            min: Vec3::splat(-half_extent),
            max: Vec3::splat(half_extent),
        }
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::Bounds("corners must be finite".into()));
        }
        if self.extent().cmple(Vec3::ZERO).any() {
            return Err(ConfigError::Bounds(
                "min must be strictly below max on every axis".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::centered(10.0)
    }
}

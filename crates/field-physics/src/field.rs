//! Field kinds and the per-kind law table
//!
//! Each kind maps to exactly one force law, one base-color law and one
//! boundary law, registered together in a fixed table. Adding or removing a
//! kind is a single edit here.

use glam::Vec3;

use crate::boundary;
use crate::color;
use crate::forces;
use crate::params::FieldParams;
use crate::particle::Particle;

/// The closed set of field kinds.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Gravity = 0,
    Magnetic = 1,
    Electric = 2,
    Wave = 3,
    Quantum = 4,
}

/// The three laws a field kind brings: how it pushes particles, how it
/// colors them, and what happens at the simulation cube's faces.
pub struct FieldLaws {
    pub force: fn(&Particle, &FieldParams, f32) -> Vec3,
    pub base_color: fn(usize, f32) -> Vec3,
    pub boundary: fn(&mut Particle, f32),
}

static LAWS: [FieldLaws; FieldKind::COUNT] = [
    FieldLaws {
        force: forces::gravity_force,
        base_color: color::gravity_base,
        boundary: boundary::reflect_damped,
    },
    FieldLaws {
        force: forces::magnetic_force,
        base_color: color::magnetic_base,
        boundary: boundary::reflect_damped,
    },
    FieldLaws {
        force: forces::electric_force,
        base_color: color::electric_base,
        boundary: boundary::reflect_damped,
    },
    FieldLaws {
        force: forces::wave_force,
        base_color: color::wave_base,
        boundary: boundary::reflect_damped,
    },
    FieldLaws {
        force: forces::quantum_force,
        base_color: color::quantum_base,
        boundary: boundary::wrap_periodic,
    },
];

impl FieldKind {
    pub const COUNT: usize = 5;

    pub const ALL: [FieldKind; Self::COUNT] = [
        FieldKind::Gravity,
        FieldKind::Magnetic,
        FieldKind::Electric,
        FieldKind::Wave,
        FieldKind::Quantum,
    ];

    /// The law-table entry for this kind.
    pub fn laws(self) -> &'static FieldLaws {
        &LAWS[self as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Gravity => "gravity",
            FieldKind::Magnetic => "magnetic",
            FieldKind::Electric => "electric",
            FieldKind::Wave => "wave",
            FieldKind::Quantum => "quantum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_one_table_entry() {
        assert_eq!(FieldKind::ALL.len(), LAWS.len());
        let params = FieldParams::default();
        let probe = Particle::at_rest(Vec3::new(2.0, -1.0, 3.0), 0.5, [0.0; 3]);
        for kind in FieldKind::ALL {
            let laws = kind.laws();
            assert!((laws.force)(&probe, &params, 0.5).is_finite());
            let base = (laws.base_color)(7, 0.5);
            assert!(base.cmpge(Vec3::ZERO).all() && base.cmple(Vec3::ONE).all());
            let mut p = probe;
            (laws.boundary)(&mut p, 15.0);
            assert!(p.is_finite());
        }
    }

    #[test]
    fn only_quantum_wraps() {
        for kind in FieldKind::ALL {
            let mut escaped = Particle::at_rest(Vec3::new(16.0, 0.0, 0.0), 1.0, [0.0; 3]);
            escaped.set_velocity(Vec3::new(1.0, 0.0, 0.0));
            (kind.laws().boundary)(&mut escaped, 15.0);
            if kind == FieldKind::Quantum {
                assert_eq!(escaped.position[0], -15.0);
                assert_eq!(escaped.velocity[0], 1.0);
            } else {
                assert_eq!(escaped.position[0], 15.0);
                assert_eq!(escaped.velocity[0], -0.7);
            }
        }
    }
}

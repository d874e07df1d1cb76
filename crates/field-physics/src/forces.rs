//! Force laws for the five field kinds
//!
//! Every law is a pure, total function of (particle, params, time): all
//! branches degrade to zero or bounded output, so the per-frame path never
//! fails. The quantum "fluctuation" is a deterministic pseudo-random sine
//! term, which keeps forces cacheable and tests reproducible.

use glam::Vec3;
use std::f32::consts::{SQRT_2, TAU};

use crate::constants::*;
use crate::params::FieldParams;
use crate::particle::Particle;

/// Central attraction toward the origin with a softened 1/r² profile.
/// Magnitude `strength * mass / (r² + 1)`, zero inside the singularity guard.
pub fn gravity_force(particle: &Particle, params: &FieldParams, _time: f32) -> Vec3 {
    let pos = particle.position();
    let r = pos.length();
    if r <= SINGULARITY_RADIUS {
        return Vec3::ZERO;
    }
    let magnitude = params.gravity_strength * particle.mass / (r * r + SOFTENING);
    -pos / r * magnitude
}

/// Lorentz-like force `strength * 0.1 * (v × r)`, perpendicular to both the
/// velocity and the position.
pub fn magnetic_force(particle: &Particle, params: &FieldParams, _time: f32) -> Vec3 {
    let cross = particle.velocity().cross(particle.position());
    cross * (params.magnetic_strength * MAGNETIC_SCALE)
}

/// Radial force away from the origin for positive charge, toward it for
/// negative, zero for a neutral charge. Same softening and singularity
/// guard as gravity.
pub fn electric_force(particle: &Particle, params: &FieldParams, _time: f32) -> Vec3 {
    let pos = particle.position();
    let r = pos.length();
    if r <= SINGULARITY_RADIUS || params.charge == 0.0 {
        return Vec3::ZERO;
    }
    let magnitude = params.electric_strength * params.charge.signum() / (r * r + SOFTENING);
    pos / r * magnitude
}

/// Radiating oscillation: a damped sine along the radial direction plus a
/// small per-axis perturbation on x (sine) and y (cosine), each phased by
/// that coordinate's contribution to the wavelength.
pub fn wave_force(particle: &Particle, params: &FieldParams, time: f32) -> Vec3 {
    let pos = particle.position();
    let r = pos.length();
    let carrier = TAU * params.wave_frequency * time;

    let mut force = Vec3::ZERO;
    if r > WAVE_RADIAL_MIN {
        let phase = carrier - r / params.wave_wavelength;
        force = pos / r * (params.wave_amplitude * phase.sin() * (-WAVE_FALLOFF * r).exp());
    }
    let ripple = params.wave_amplitude * WAVE_PERTURBATION;
    force.x += ripple * (carrier - pos.x / params.wave_wavelength).sin();
    force.y += ripple * (carrier - pos.y / params.wave_wavelength).cos();
    force
}

/// Fixed wave-vector push inside a Gaussian packet centered on the origin,
/// plus a deterministic fluctuation along the position vector.
pub fn quantum_force(particle: &Particle, params: &FieldParams, time: f32) -> Vec3 {
    let pos = particle.position();
    let k = Vec3::from_array(params.wave_vector);
    let width = params.packet_width;
    let envelope = (-pos.length_squared() / (2.0 * width * width)).exp();
    let phase = TAU * params.quantum_frequency * time + pos.dot(k);

    k * (params.quantum_strength * QUANTUM_SCALE * envelope)
        + pos * (params.quantum_fluctuation * FLUCTUATION_SCALE * (phase * SQRT_2).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(position: Vec3, velocity: Vec3) -> Particle {
        let mut p = Particle::at_rest(position, 1.0, [0.0; 3]);
        p.set_velocity(velocity);
        p
    }

    #[test]
    fn gravity_points_at_origin_and_guards_singularity() {
        let params = FieldParams::default();
        let p = probe(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO);
        let f = gravity_force(&p, &params, 0.0);
        assert!(f.x < 0.0 && f.y == 0.0 && f.z == 0.0);
        let expected = params.gravity_strength * p.mass / (25.0 + 1.0);
        assert!((f.length() - expected).abs() < 1e-6);

        let near = probe(Vec3::new(0.05, 0.0, 0.0), Vec3::ZERO);
        assert_eq!(gravity_force(&near, &params, 0.0), Vec3::ZERO);
        let edge = probe(Vec3::new(0.1, 0.0, 0.0), Vec3::ZERO);
        assert_eq!(gravity_force(&edge, &params, 0.0), Vec3::ZERO);
    }

    #[test]
    fn gravity_scales_with_mass() {
        let params = FieldParams::default();
        let light = probe(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO);
        let mut heavy = light;
        heavy.mass = 2.0;
        let fl = gravity_force(&light, &params, 0.0);
        let fh = gravity_force(&heavy, &params, 0.0);
        assert!((fh.length() / fl.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn magnetic_is_perpendicular_to_velocity_and_position() {
        let params = FieldParams::default();
        let p = probe(Vec3::new(2.0, 1.0, -3.0), Vec3::new(0.5, -1.0, 2.0));
        let f = magnetic_force(&p, &params, 0.0);
        assert!(f.dot(p.velocity()).abs() < 1e-5);
        assert!(f.dot(p.position()).abs() < 1e-5);
        // A particle at rest feels nothing.
        let rest = probe(Vec3::new(2.0, 1.0, -3.0), Vec3::ZERO);
        assert_eq!(magnetic_force(&rest, &params, 0.0), Vec3::ZERO);
    }

    #[test]
    fn electric_sign_convention() {
        let mut params = FieldParams::default();
        let p = probe(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO);

        params.charge = 1.0;
        let repel = electric_force(&p, &params, 0.0);
        assert!(repel.y > 0.0);

        params.charge = -2.5;
        let attract = electric_force(&p, &params, 0.0);
        assert!(attract.y < 0.0);
        // Magnitude depends only on the sign of the charge.
        assert!((attract.length() - repel.length()).abs() < 1e-6);

        let near = probe(Vec3::new(0.0, 0.08, 0.0), Vec3::ZERO);
        assert_eq!(electric_force(&near, &params, 0.0), Vec3::ZERO);

        // sign(0) is 0: a neutral charge feels no electric force.
        params.charge = 0.0;
        assert_eq!(electric_force(&p, &params, 0.0), Vec3::ZERO);
        params.charge = -0.0;
        assert_eq!(electric_force(&p, &params, 0.0), Vec3::ZERO);
    }

    #[test]
    fn wave_skips_radial_term_at_origin_but_still_ripples() {
        let params = FieldParams::default();
        let center = probe(Vec3::ZERO, Vec3::ZERO);
        // At t chosen so cos(carrier) != 0, the y ripple must be nonzero.
        let f = wave_force(&center, &params, 0.0);
        assert_eq!(f.x, 0.0); // sin(0) = 0
        assert!(f.y != 0.0); // cos(0) = 1
        assert_eq!(f.z, 0.0);
        assert!(f.is_finite());
    }

    #[test]
    fn wave_radial_term_decays_with_distance() {
        let params = FieldParams::default();
        // Compare envelope magnitudes at matched phase points.
        let near = probe(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        let far = probe(Vec3::new(30.0, 0.0, 0.0), Vec3::ZERO);
        let near_force = wave_force(&near, &params, 0.25);
        let far_force = wave_force(&far, &params, 0.25);
        assert!(near_force.is_finite() && far_force.is_finite());
        assert!(far_force.length() < params.wave_amplitude * (1.0 + WAVE_PERTURBATION * 2.0));
    }

    #[test]
    fn quantum_envelope_fades_with_distance() {
        let mut params = FieldParams::default();
        params.quantum_fluctuation = 0.0;
        let near = probe(Vec3::splat(0.5), Vec3::ZERO);
        let far = probe(Vec3::splat(20.0), Vec3::ZERO);
        let near_force = quantum_force(&near, &params, 1.0);
        let far_force = quantum_force(&far, &params, 1.0);
        assert!(near_force.length() > far_force.length());
        // Wave-vector term is parallel to k.
        let k = Vec3::from_array(params.wave_vector);
        assert!(near_force.normalize().dot(k.normalize()) > 0.999);
    }

    #[test]
    fn quantum_is_deterministic() {
        let params = FieldParams::default();
        let p = probe(Vec3::new(1.0, -2.0, 0.5), Vec3::ZERO);
        assert_eq!(
            quantum_force(&p, &params, 3.7),
            quantum_force(&p, &params, 3.7)
        );
    }
}

//! Boundary policies
//!
//! Every policy enforces the same exact post-condition: after `apply`, no
//! coordinate's absolute value exceeds the boundary half-extent.

use crate::constants::BOUNCE_DAMPING;
use crate::particle::Particle;

/// Elastic reflection with damping: a violated coordinate is clamped to the
/// boundary face and that axis's velocity is negated and scaled by 0.7.
pub fn reflect_damped(particle: &mut Particle, boundary: f32) {
    for axis in 0..3 {
        if particle.position[axis] > boundary {
            particle.position[axis] = boundary;
            particle.velocity[axis] = -particle.velocity[axis] * BOUNCE_DAMPING;
        } else if particle.position[axis] < -boundary {
            particle.position[axis] = -boundary;
            particle.velocity[axis] = -particle.velocity[axis] * BOUNCE_DAMPING;
        }
    }
}

/// Periodic wrap: a violated coordinate teleports to the opposite boundary
/// face. Velocity is left untouched.
pub fn wrap_periodic(particle: &mut Particle, boundary: f32) {
    for axis in 0..3 {
        if particle.position[axis].abs() > boundary {
            particle.position[axis] = -particle.position[axis].signum() * boundary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn moving(position: Vec3, velocity: Vec3) -> Particle {
        let mut p = Particle::at_rest(position, 1.0, [0.0; 3]);
        p.set_velocity(velocity);
        p
    }

    #[test]
    fn reflection_clamps_exactly_and_damps_by_point_seven() {
        let mut p = moving(Vec3::new(16.2, -15.4, 3.0), Vec3::new(2.0, -1.0, 0.5));
        reflect_damped(&mut p, 15.0);
        assert_eq!(p.position, [15.0, -15.0, 3.0]);
        assert_eq!(p.velocity, [-1.4, 0.7, 0.5]);
        // Post-condition holds exactly.
        assert!(p.position.iter().all(|c| c.abs() <= 15.0));
    }

    #[test]
    fn reflection_leaves_interior_particles_alone() {
        let mut p = moving(Vec3::new(14.9, 0.0, -14.9), Vec3::new(9.0, 9.0, 9.0));
        let before = p;
        reflect_damped(&mut p, 15.0);
        assert_eq!(p, before);
    }

    #[test]
    fn wrap_teleports_without_touching_velocity() {
        let mut p = moving(Vec3::new(15.5, -20.0, 0.0), Vec3::new(3.0, -2.0, 1.0));
        wrap_periodic(&mut p, 15.0);
        assert_eq!(p.position, [-15.0, 15.0, 0.0]);
        assert_eq!(p.velocity, [3.0, -2.0, 1.0]);
        assert!(p.position.iter().all(|c| c.abs() <= 15.0));
    }

    #[test]
    fn wrap_ignores_coordinates_on_or_inside_the_face() {
        let mut p = moving(Vec3::new(15.0, -15.0, 7.0), Vec3::ZERO);
        let before = p;
        wrap_periodic(&mut p, 15.0);
        assert_eq!(p, before);
    }
}

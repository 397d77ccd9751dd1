use ball_core::PhysicsBody;
use glam::{Quat, Vec3};

/// Point-mass stand-in for an engine rigid body.
///
/// Forces and torques accumulate until the next [`integrate`](Self::integrate)
/// and are applied as continuous forces over one step (`v += F / m * dt`).
#[derive(Debug, Clone)]
pub struct SimBody {
    pub pos: Vec3,
    pub rot: Quat,
    pub vel: Vec3,
    pub ang_vel: Vec3,
    pub mass: f32,
    pub inertia: f32,
    pub kinematic: bool,
    pub attached: bool, // Parented to the paddle
    force: Vec3,
    torque: Vec3,
}

impl SimBody {
    /// A kinematic body riding the paddle
    pub fn on_paddle(pos: Vec3) -> Self {
        Self {
            pos,
            rot: Quat::IDENTITY,
            vel: Vec3::ZERO,
            ang_vel: Vec3::ZERO,
            mass: 1.0,
            inertia: 0.1,
            kinematic: true,
            attached: true,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
        }
    }

    pub fn pending_force(&self) -> Vec3 {
        self.force
    }

    /// Advance one step. Kinematic bodies ignore accumulated forces.
    pub fn integrate(&mut self, dt: f32) {
        if self.kinematic {
            self.force = Vec3::ZERO;
            self.torque = Vec3::ZERO;
            return;
        }

        self.vel += self.force / self.mass * dt;
        self.ang_vel += self.torque / self.inertia * dt;
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;

        self.pos += self.vel * dt;
        let spin = self.ang_vel * dt;
        if spin.length_squared() > 0.0 {
            self.rot = (Quat::from_scaled_axis(spin) * self.rot).normalize();
        }
    }
}

impl PhysicsBody for SimBody {
    fn velocity(&self) -> Vec3 {
        self.vel
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.vel = velocity;
    }

    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }

    fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn apply_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    fn detach_from_parent(&mut self) {
        self.attached = false;
    }

    fn position(&self) -> Vec3 {
        self.pos
    }

    fn rotation(&self) -> Quat {
        self.rot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinematic_body_ignores_force() {
        let mut body = SimBody::on_paddle(Vec3::ZERO);
        body.apply_force(Vec3::new(500.0, 500.0, 0.0));
        body.integrate(0.02);
        assert_eq!(body.vel, Vec3::ZERO);
        assert_eq!(body.pending_force(), Vec3::ZERO);
    }

    #[test]
    fn test_force_integrates_over_one_step() {
        let mut body = SimBody::on_paddle(Vec3::ZERO);
        body.set_kinematic(false);
        body.apply_force(Vec3::new(500.0, 500.0, 0.0));
        body.integrate(0.02);

        assert!(body.vel.abs_diff_eq(Vec3::new(10.0, 10.0, 0.0), 1e-4));
        assert!(body.pos.abs_diff_eq(Vec3::new(0.2, 0.2, 0.0), 1e-4));
        assert_eq!(body.pending_force(), Vec3::ZERO, "Forces are consumed");
    }

    #[test]
    fn test_torque_spins_body() {
        let mut body = SimBody::on_paddle(Vec3::ZERO);
        body.set_kinematic(false);
        body.apply_torque(Vec3::new(7.0, 7.0, 0.0));
        body.integrate(0.02);

        assert!(body.ang_vel.length() > 0.0);
        assert_ne!(body.rot, Quat::IDENTITY);
        assert!(body.rot.is_normalized());
    }
}

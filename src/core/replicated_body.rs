use bevy::prelude::*;
use super::interpolation::euler_degrees_to_quat;

/// Render target the replicator reads from and writes to.
/// Angular velocity crosses this boundary in degrees per second.
pub trait ReplicatedBody {
    fn location(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    fn scale(&self) -> Vec3;
    fn linear_velocity(&self) -> Vec3;
    fn angular_velocity_degrees(&self) -> Vec3;
    fn is_simulating_physics(&self) -> bool;

    fn set_location(&mut self, location: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
    fn set_scale(&mut self, scale: Vec3);
    fn set_linear_velocity(&mut self, velocity: Vec3);
    fn set_angular_velocity_degrees(&mut self, velocity: Vec3);
    fn set_simulate_physics(&mut self, simulate: bool);

    #[inline]
    fn set_rotation_euler_degrees(&mut self, euler: Vec3) {
        self.set_rotation(euler_degrees_to_quat(euler));
    }
}

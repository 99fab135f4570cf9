use bevy::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InterpolationOrigin {
    pub location: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3
}

impl Default for InterpolationOrigin {
    #[inline]
    fn default() -> Self {
        Self{
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO
        }
    }
}

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use crate::core::ReplicatedBody;

const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;
const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// [`ReplicatedBody`] over a rapier rigid body.
/// Dynamic bodies count as simulating, disabling simulation turns the body
/// kinematic position based. Missing velocity reads as zero.
pub struct RapierBody<'a> {
    transform: Mut<'a, Transform>,
    velocity: Option<Mut<'a, Velocity>>,
    rigidbody: Option<Mut<'a, RigidBody>>
}

impl<'a> RapierBody<'a> {
    #[inline]
    pub fn new(
        transform: Mut<'a, Transform>,
        velocity: Option<Mut<'a, Velocity>>,
        rigidbody: Option<Mut<'a, RigidBody>>
    ) -> Self {
        Self{
            transform,
            velocity,
            rigidbody
        }
    }
}

impl<'a> ReplicatedBody for RapierBody<'a> {
    #[inline]
    fn location(&self) -> Vec3 {
        self.transform.translation
    }

    #[inline]
    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    #[inline]
    fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    #[inline]
    fn linear_velocity(&self) -> Vec3 {
        self.velocity
        .as_ref()
        .map_or(Vec3::ZERO, |v| v.linvel)
    }

    #[inline]
    fn angular_velocity_degrees(&self) -> Vec3 {
        self.velocity
        .as_ref()
        .map_or(Vec3::ZERO, |v| v.angvel * RAD_TO_DEG)
    }

    #[inline]
    fn is_simulating_physics(&self) -> bool {
        matches!(self.rigidbody.as_deref(), Some(RigidBody::Dynamic))
    }

    #[inline]
    fn set_location(&mut self, location: Vec3) {
        self.transform.translation = location;
    }

    #[inline]
    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    #[inline]
    fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    #[inline]
    fn set_linear_velocity(&mut self, velocity: Vec3) {
        if let Some(v) = self.velocity.as_mut() {
            v.linvel = velocity;
        }
    }

    #[inline]
    fn set_angular_velocity_degrees(&mut self, velocity: Vec3) {
        if let Some(v) = self.velocity.as_mut() {
            v.angvel = velocity * DEG_TO_RAD;
        }
    }

    fn set_simulate_physics(&mut self, simulate: bool) {
        let Some(rb) = self.rigidbody.as_mut() else {
            return;
        };

        let next = if simulate {
            RigidBody::Dynamic
        } else {
            RigidBody::KinematicPositionBased
        };
        if **rb != next {
            debug!("rigidbody switched to {next:?}");
            **rb = next;
        }
    }
}

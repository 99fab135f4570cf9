use bevy::prelude::*;
use serde::{Serialize, Deserialize};
use super::replicated_body::ReplicatedBody;

pub const SNAPSHOT_QUANTIZE_SCALE: f32 = 100.0;

#[inline]
pub fn quantize_vec3_100(vec: Vec3) -> Vec3 {
    (vec * SNAPSHOT_QUANTIZE_SCALE).round() / SNAPSHOT_QUANTIZE_SCALE
}

#[derive(Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VelocitySampling {
    #[default]
    Separate,
    AngularForBoth
}

/// Authoritative state of one object, published by the server once per tick.
/// Angular velocity is in degrees per second.
#[derive(Component, Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct ServerSnapshot {
    pub location: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub simulating_physics: bool
}

impl Default for ServerSnapshot {
    #[inline]
    fn default() -> Self {
        Self{
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            simulating_physics: false
        }
    }
}

impl ServerSnapshot {
    pub fn sample<B>(body: &B, velocity_sampling: VelocitySampling) -> Self
    where B: ReplicatedBody + ?Sized {
        let angular_velocity = body.angular_velocity_degrees();
        let linear_velocity = match velocity_sampling {
            VelocitySampling::Separate => body.linear_velocity(),
            VelocitySampling::AngularForBoth => angular_velocity
        };

        Self{
            location: quantize_vec3_100(body.location()),
            rotation: body.rotation().normalize(),
            scale: quantize_vec3_100(body.scale()),
            linear_velocity: quantize_vec3_100(linear_velocity),
            angular_velocity: quantize_vec3_100(angular_velocity),
            simulating_physics: body.is_simulating_physics()
        }
    }

    #[inline]
    pub fn from_transform(transform: &Transform) -> Self {
        Self{
            location: quantize_vec3_100(transform.translation),
            rotation: transform.rotation.normalize(),
            scale: quantize_vec3_100(transform.scale),
            ..default()
        }
    }

    #[inline]
    pub fn to_transform(&self) -> Transform {
        Transform{
            translation: self.location,
            rotation: self.rotation,
            scale: self.scale
        }
    }
}

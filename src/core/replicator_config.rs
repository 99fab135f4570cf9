use anyhow::bail;
use serde::{Serialize, Deserialize};
use super::{
    interp_method::InterpMethod,
    snapshot::VelocitySampling
};

pub const DEFAULT_MAX_DISTANCE_FOR_INTERP: f32 = 256.0;
pub const DEFAULT_MIN_DISTANCE_FOR_VECTOR_INTERP: f32 = 25.0;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReplicatedChannels {
    pub location: bool,
    pub rotation: bool,
    pub scale: bool,
    pub linear_velocity: bool,
    pub angular_velocity: bool
}

impl Default for ReplicatedChannels {
    #[inline]
    fn default() -> Self {
        Self::all()
    }
}

impl ReplicatedChannels {
    #[inline]
    pub fn all() -> Self {
        Self{
            location: true,
            rotation: true,
            scale: true,
            linear_velocity: true,
            angular_velocity: true
        }
    }

    #[inline]
    pub fn none() -> Self {
        Self{
            location: false,
            rotation: false,
            scale: false,
            linear_velocity: false,
            angular_velocity: false
        }
    }

    #[inline]
    pub fn transform_only() -> Self {
        Self{
            linear_velocity: false,
            angular_velocity: false,
            ..Self::all()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct TransformReplicatorConfig {
    pub channels: ReplicatedChannels,
    pub interp_method: InterpMethod,
    pub max_distance_for_interp: f32,
    pub min_distance_for_vector_interp: f32,
    pub velocity_sampling: VelocitySampling,
    // stop at the snapshot instead of extrapolating when the next one is late
    pub clamp_blend_ratio: bool,
    // lets `CubicInterp` apply regardless of the delta
    pub force_interp_method: bool
}

impl Default for TransformReplicatorConfig {
    #[inline]
    fn default() -> Self {
        Self{
            channels: ReplicatedChannels::default(),
            interp_method: InterpMethod::default(),
            max_distance_for_interp: DEFAULT_MAX_DISTANCE_FOR_INTERP,
            min_distance_for_vector_interp: DEFAULT_MIN_DISTANCE_FOR_VECTOR_INTERP,
            velocity_sampling: VelocitySampling::default(),
            clamp_blend_ratio: false,
            force_interp_method: false
        }
    }
}

impl TransformReplicatorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.max_distance_for_interp.is_finite()
        || self.max_distance_for_interp < 0.0 {
            bail!(
                "max distance for interp must be finite and positive: {}",
                self.max_distance_for_interp
            );
        }
        if !self.min_distance_for_vector_interp.is_finite()
        || self.min_distance_for_vector_interp < 0.0 {
            bail!(
                "min distance for vector interp must be finite and positive: {}",
                self.min_distance_for_vector_interp
            );
        }
        if self.min_distance_for_vector_interp > self.max_distance_for_interp {
            bail!(
                "min distance for vector interp: {} is larger than max distance for interp: {}",
                self.min_distance_for_vector_interp,
                self.max_distance_for_interp
            );
        }

        Ok(())
    }
}

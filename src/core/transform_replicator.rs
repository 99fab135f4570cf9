use bevy::prelude::*;
use super::{
    interp_method::ResolvedInterpMethod,
    interpolation::*,
    interpolation_origin::InterpolationOrigin,
    replicated_body::ReplicatedBody,
    replicator_config::TransformReplicatorConfig,
    skip::{InterpSkipReason, InterpolationSkipHandler},
    snapshot::ServerSnapshot
};

/// Output of one blend step, before it is written to the render target.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BlendResult {
    pub method: ResolvedInterpMethod,
    pub ratio: f32,
    pub location: Vec3,
    pub rotation: Quat,
    // degrees, vector only
    pub euler_rotation: Vec3,
    pub scale: Vec3,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TickOutcome {
    Sampled,
    NoTarget,
    AwaitingSecondSnapshot,
    Skipped(InterpSkipReason),
    Blended(BlendResult)
}

/// Smooths a rendered body toward the latest [`ServerSnapshot`].
#[derive(Component, Clone, Debug)]
pub struct TransformReplicator {
    pub config: TransformReplicatorConfig,
    origin: InterpolationOrigin,
    time_since_last_snapshot: f32,
    interval_between_last_two_snapshots: f32,
    should_update_physics: bool
}

impl Default for TransformReplicator {
    #[inline]
    fn default() -> Self {
        Self::new(TransformReplicatorConfig::default())
    }
}

impl TransformReplicator {
    #[inline]
    pub fn new(config: TransformReplicatorConfig) -> Self {
        Self{
            config,
            origin: InterpolationOrigin::default(),
            time_since_last_snapshot: 0.0,
            interval_between_last_two_snapshots: 0.0,
            should_update_physics: false
        }
    }

    #[inline]
    pub fn origin(&self) -> &InterpolationOrigin {
        &self.origin
    }

    #[inline]
    pub fn time_since_last_snapshot(&self) -> f32 {
        self.time_since_last_snapshot
    }

    #[inline]
    pub fn interval_between_last_two_snapshots(&self) -> f32 {
        self.interval_between_last_two_snapshots
    }

    #[inline]
    pub fn should_update_physics(&self) -> bool {
        self.should_update_physics
    }

    #[inline]
    pub fn has_interval(&self) -> bool {
        self.interval_between_last_two_snapshots >= KINDA_SMALL_NUMBER
    }

    /// Progress through the current window. Goes past 1.0 when the next
    /// snapshot is late unless `clamp_blend_ratio` is set.
    #[inline]
    pub fn blend_ratio(&self) -> f32 {
        if !self.has_interval() {
            return 0.0;
        }

        let ratio = self.time_since_last_snapshot / self.interval_between_last_two_snapshots;
        if self.config.clamp_blend_ratio {
            ratio.min(1.0)
        } else {
            ratio
        }
    }

    /// Per tick entry point. Authority samples the body into `snapshot`,
    /// observers blend the body toward it.
    pub fn tick<B, H>(
        &mut self,
        has_authority: bool,
        entity: Entity,
        delta: f32,
        snapshot: &mut ServerSnapshot,
        body: Option<&mut B>,
        handler: &H
    ) -> TickOutcome
    where
    B: ReplicatedBody + ?Sized,
    H: InterpolationSkipHandler + ?Sized {
        if has_authority {
            match self.sample_authority(body.as_deref()) {
                Some(s) => {
                    *snapshot = s;
                    TickOutcome::Sampled
                }
                None => TickOutcome::NoTarget
            }
        } else {
            self.observer_tick(entity, delta, snapshot, body, handler)
        }
    }

    pub fn sample_authority<B>(&self, body: Option<&B>) -> Option<ServerSnapshot>
    where B: ReplicatedBody + ?Sized {
        let body = body?;
        Some(ServerSnapshot::sample(body, self.config.velocity_sampling))
    }

    pub fn on_snapshot_arrival<B>(&mut self, snapshot: &ServerSnapshot, body: Option<&mut B>)
    where B: ReplicatedBody + ?Sized {
        self.interval_between_last_two_snapshots = self.time_since_last_snapshot;
        self.time_since_last_snapshot = 0.0;

        self.should_update_physics = snapshot.simulating_physics;
        self.origin.linear_velocity = snapshot.linear_velocity;
        self.origin.angular_velocity = snapshot.angular_velocity;

        let Some(body) = body else {
            return;
        };

        self.origin.location = body.location();
        self.origin.rotation = body.rotation();
        self.origin.scale = body.scale();

        // rough placement, scale waits for the blend
        body.set_location(snapshot.location);
        body.set_rotation(snapshot.rotation);
    }

    pub fn observer_tick<B, H>(
        &mut self,
        entity: Entity,
        delta: f32,
        snapshot: &ServerSnapshot,
        body: Option<&mut B>,
        handler: &H
    ) -> TickOutcome
    where
    B: ReplicatedBody + ?Sized,
    H: InterpolationSkipHandler + ?Sized {
        // keeps counting without a target, otherwise the first interval is never measured
        self.time_since_last_snapshot += delta;

        let Some(body) = body else {
            return TickOutcome::NoTarget;
        };

        if !self.has_interval() {
            return TickOutcome::AwaitingSecondSnapshot;
        }

        // physics belongs to the authority
        if body.is_simulating_physics() {
            body.set_simulate_physics(false);
        }

        let delta_position = position_delta(snapshot.location, self.origin.location);
        if delta_position > self.config.max_distance_for_interp {
            let reason = handler.on_interpolation_skipped(
                entity,
                InterpSkipReason::DistanceTooBig
            );
            return TickOutcome::Skipped(reason);
        }

        let method = self.config.interp_method.resolve(
            delta_position,
            self.config.min_distance_for_vector_interp,
            self.config.force_interp_method
        );
        let blend = self.compute_blend(snapshot, delta, method);
        self.apply_blend(&blend, body);
        TickOutcome::Blended(blend)
    }

    pub fn compute_blend(
        &self,
        snapshot: &ServerSnapshot,
        delta: f32,
        method: ResolvedInterpMethod
    ) -> BlendResult {
        let ratio = self.blend_ratio();
        let speed = ratio * INTERP_SPEED_SCALE;
        let origin = &self.origin;

        match method {
            ResolvedInterpMethod::Cubic => {
                let rotation = origin.rotation.slerp(snapshot.rotation, ratio);
                BlendResult{
                    method,
                    ratio,
                    location: cubic_interp(
                        origin.location,
                        origin.linear_velocity,
                        snapshot.location,
                        snapshot.linear_velocity,
                        ratio
                    ),
                    rotation,
                    euler_rotation: quat_to_euler_degrees(rotation),
                    scale: vinterp_to(origin.scale, snapshot.scale, delta, speed),
                    linear_velocity: cubic_interp_derivative(
                        origin.location,
                        origin.linear_velocity,
                        snapshot.location,
                        snapshot.linear_velocity,
                        ratio
                    ),
                    angular_velocity: cubic_interp_derivative(
                        origin.location,
                        origin.angular_velocity,
                        snapshot.location,
                        snapshot.angular_velocity,
                        ratio
                    )
                }
            }
            ResolvedInterpMethod::Vector => {
                let euler_rotation = rinterp_to(
                    quat_to_euler_degrees(origin.rotation),
                    quat_to_euler_degrees(snapshot.rotation),
                    delta,
                    speed
                );
                BlendResult{
                    method,
                    ratio,
                    location: vinterp_to(origin.location, snapshot.location, delta, speed),
                    rotation: euler_degrees_to_quat(euler_rotation),
                    euler_rotation,
                    scale: vinterp_to(origin.scale, snapshot.scale, delta, speed),
                    linear_velocity: vinterp_to(
                        origin.linear_velocity,
                        snapshot.linear_velocity,
                        delta,
                        speed
                    ),
                    angular_velocity: vinterp_to(
                        origin.angular_velocity,
                        snapshot.angular_velocity,
                        delta,
                        speed
                    )
                }
            }
        }
    }

    pub fn apply_blend<B>(&self, blend: &BlendResult, body: &mut B)
    where B: ReplicatedBody + ?Sized {
        let channels = &self.config.channels;

        if channels.location {
            body.set_location(blend.location);
        }
        if channels.rotation {
            match blend.method {
                ResolvedInterpMethod::Cubic => body.set_rotation(blend.rotation),
                ResolvedInterpMethod::Vector => body.set_rotation_euler_degrees(blend.euler_rotation)
            }
        }
        if channels.scale {
            body.set_scale(blend.scale);
        }
        if channels.linear_velocity && self.should_update_physics {
            body.set_linear_velocity(blend.linear_velocity);
        }
        if channels.angular_velocity && self.should_update_physics {
            body.set_angular_velocity_degrees(blend.angular_velocity);
        }
    }
}

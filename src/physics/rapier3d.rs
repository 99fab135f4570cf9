use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_replicon::prelude::*;

pub struct Rapier3DPlugin {
    pub delta_time: f32,
    pub substeps: usize
}

impl Plugin for Rapier3DPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.delta_time as f64))
        .insert_resource(TimestepMode::Fixed{
            dt: self.delta_time,
            substeps: self.substeps
        })
        .add_plugins(
            RapierPhysicsPlugin::<NoUserData>::default()
            .in_fixed_schedule()
        );

        if app.world().contains_resource::<RepliconClient>() {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

#[derive(Bundle)]
pub struct DynamicRigidBodyBundle {
    pub rigidbody: RigidBody,
    pub velocity: Velocity,
    pub mass: AdditionalMassProperties,
    pub sleeping: Sleeping
}

impl DynamicRigidBodyBundle {
    #[inline]
    pub fn new(mass: f32, linear_velocity: Vec3, angular_velocity: Vec3) -> Self {
        Self{
            rigidbody: RigidBody::Dynamic,
            velocity: Velocity{
                linvel: linear_velocity,
                angvel: angular_velocity
            },
            mass: AdditionalMassProperties::Mass(mass),
            sleeping: Sleeping::default()
        }
    }

    #[inline]
    pub fn replica() -> impl Bundle {
        (
            RigidBody::KinematicPositionBased,
            Velocity::zero()
        )
    }
}

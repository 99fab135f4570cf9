use bevy_rapier3d::prelude::*;
use super::{
    level::*,
    *
};

#[derive(Clone, Copy)]
pub struct LoggingSkipHandler;

impl InterpolationSkipHandler for LoggingSkipHandler {
    fn on_interpolation_skipped(&self, entity: Entity, reason: InterpSkipReason)
    -> InterpSkipReason {
        warn!("cube: {entity:?} snapped to the server: {reason}");
        reason
    }
}

#[derive(Resource, Default)]
pub struct SkipCount(pub usize);

pub struct GameClientPlugin;

impl Plugin for GameClientPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GameCommonPlugin)
        .init_resource::<SkipCount>()
        .add_systems(Startup, (
            setup_light,
            setup_fixed_camera,
            client_setup_floor
        ))
        .add_systems(PreUpdate,
            handle_cube_spawned
            .after(ClientSet::Receive)
            .before(ClientReplicatorSet::ApplySnapshot)
        )
        .add_systems(Update, (
            handle_transport_error,
            count_skips
            .after(ClientReplicatorSet::Blend)
        ));
    }
}

fn handle_cube_spawned(
    mut commands: Commands,
    query: Query<(
        Entity,
        &CubePresentation,
        &ServerSnapshot
    ),
        Added<CubePresentation>
    >,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>
) {
    for (e, presentation, snapshot) in query.iter() {
        // replicas are kinematic, velocities would be ignored
        let config = match cube_replicator_config() {
            Ok(c) => TransformReplicatorConfig{
                channels: ReplicatedChannels::transform_only(),
                ..c
            },
            Err(e) => {
                error(e);
                return;
            }
        };

        let half = DEV_CUBE_SIZE * 0.5;
        commands.entity(e).insert((
            PbrBundle{
                mesh: meshes.add(Mesh::from(Cuboid::from_length(DEV_CUBE_SIZE))),
                material: materials.add(presentation.color()),
                transform: snapshot.to_transform(),
                ..default()
            },
            TransformReplicator::new(config),
            DynamicRigidBodyBundle::replica(),
            Collider::cuboid(half, half, half)
        ));

        info!("cube: {e:?} replicated at: {}", snapshot.location);
    }
}

fn count_skips(
    mut events: EventReader<InterpolationSkipped>,
    mut count: ResMut<SkipCount>
) {
    for InterpolationSkipped { entity, reason } in events.read() {
        count.0 += 1;
        debug!("cube: {entity:?} skipped: {reason}, total skips: {}", count.0);
    }
}

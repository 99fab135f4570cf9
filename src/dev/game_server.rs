use bevy::math::vec3;
use bevy_rapier3d::prelude::*;
use super::{
    level::*,
    *
};

#[derive(Resource)]
pub struct ImpulseTimer(pub Timer);

pub struct GameServerPlugin;

impl Plugin for GameServerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GameCommonPlugin)
        .insert_resource(ImpulseTimer(Timer::from_seconds(
            DEV_IMPULSE_INTERVAL_SEC,
            TimerMode::Repeating
        )))
        .add_systems(Startup, (
            server_setup_floor,
            spawn_cubes
        ))
        .add_systems(Update, (
            handle_transport_error,
            handle_server_event,
            kick_cubes
        ).chain());
    }
}

fn handle_server_event(mut events: EventReader<ServerEvent>) {
    for e in events.read() {
        match e {
            ServerEvent::ClientConnected { client_id } => {
                info!("client: {client_id:?} connected");
            }
            ServerEvent::ClientDisconnected { client_id, reason } => {
                info!("client: {client_id:?} disconnected with reason: {reason}");
            }
        }
    }
}

#[inline]
fn random_spawn_position(rng: &mut impl Rng) -> Vec3 {
    vec3(
        rng.gen_range(-DEV_SPAWN_RANGE..DEV_SPAWN_RANGE),
        DEV_CUBE_DROP_HEIGHT,
        rng.gen_range(-DEV_SPAWN_RANGE..DEV_SPAWN_RANGE)
    )
}

fn spawn_cubes(mut commands: Commands) {
    let config = match cube_replicator_config() {
        Ok(c) => c,
        Err(e) => {
            error(e);
            return;
        }
    };

    let mut rng = thread_rng();
    let half = DEV_CUBE_SIZE * 0.5;
    for _ in 0..DEV_CUBE_COUNT {
        let transform = Transform::from_translation(random_spawn_position(&mut rng));
        let e = commands.spawn((
            Replicated,
            CubePresentation::random(),
            TransformBundle::from_transform(transform),
            TransformReplicatorBundle::new(config, &transform),
            DynamicRigidBodyBundle::new(DEV_CUBE_MASS, Vec3::ZERO, Vec3::ZERO),
            Collider::cuboid(half, half, half),
            ExternalImpulse::default()
        ))
        .id();

        info!("cube: {e:?} spawned at: {}", transform.translation);
    }
}

fn kick_cubes(
    mut query: Query<(
        Entity,
        &mut Transform,
        &mut ExternalImpulse
    ),
        With<CubePresentation>
    >,
    mut timer: ResMut<ImpulseTimer>,
    time: Res<Time>
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    let mut rng = thread_rng();
    for (e, mut transform, mut impulse) in query.iter_mut() {
        if rng.gen_bool(DEV_TELEPORT_CHANCE) {
            // far enough for clients to give up blending
            transform.translation.y += DEV_TELEPORT_HEIGHT;
            info!("cube: {e:?} teleported to: {}", transform.translation);
            continue;
        }

        impulse.impulse = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.5..1.5),
            rng.gen_range(-1.0..1.0)
        ) * DEV_IMPULSE_STRENGTH;
        impulse.torque_impulse = vec3(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0)
        );
    }
}

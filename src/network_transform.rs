use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_replicon::prelude::*;
use crate::{
    core::*,
    physics::RapierBody
};

#[derive(Resource)]
pub struct SkipHandler(Box<dyn InterpolationSkipHandler>);

impl Default for SkipHandler {
    #[inline]
    fn default() -> Self {
        Self::new(DefaultSkipHandler)
    }
}

impl SkipHandler {
    #[inline]
    pub fn new<H: InterpolationSkipHandler>(handler: H) -> Self {
        Self(Box::new(handler))
    }

    #[inline]
    pub fn get(&self) -> &dyn InterpolationSkipHandler {
        self.0.as_ref()
    }
}

#[derive(Event, Clone, Copy, PartialEq, Eq, Debug)]
pub struct InterpolationSkipped {
    pub entity: Entity,
    pub reason: InterpSkipReason
}

#[derive(Bundle, Default)]
pub struct TransformReplicatorBundle {
    pub replicator: TransformReplicator,
    pub snapshot: ServerSnapshot
}

impl TransformReplicatorBundle {
    #[inline]
    pub fn new(config: TransformReplicatorConfig, init: &Transform) -> Self {
        Self{
            replicator: TransformReplicator::new(config),
            snapshot: ServerSnapshot::from_transform(init)
        }
    }
}

pub(crate) fn sample_snapshot_system(
    mut query: Query<(
        &TransformReplicator,
        &mut ServerSnapshot,
        Option<&mut Transform>,
        Option<&mut Velocity>,
        Option<&mut RigidBody>
    )>
) {
    for (replicator, mut snapshot, transform, velocity, rigidbody) in query.iter_mut() {
        let body = transform.map(|t| RapierBody::new(t, velocity, rigidbody));
        let Some(sampled) = replicator.sample_authority(body.as_ref()) else {
            continue;
        };

        // replicon only sends changed components
        snapshot.set_if_neq(sampled);
    }
}

pub(crate) fn apply_snapshot_system(
    mut query: Query<(
        Entity,
        &mut TransformReplicator,
        &ServerSnapshot,
        Option<&mut Transform>,
        Option<&mut Velocity>,
        Option<&mut RigidBody>
    ),
        Changed<ServerSnapshot>
    >
) {
    for (e, mut replicator, snapshot, transform, velocity, rigidbody) in query.iter_mut() {
        let mut body = transform.map(|t| RapierBody::new(t, velocity, rigidbody));
        replicator.on_snapshot_arrival(snapshot, body.as_mut());
        debug!(
            "snapshot arrived for {e:?}: {}, interval: {}",
            snapshot.location,
            replicator.interval_between_last_two_snapshots()
        );
    }
}

pub(crate) fn blend_system(
    mut query: Query<(
        Entity,
        &mut TransformReplicator,
        &ServerSnapshot,
        Option<&mut Transform>,
        Option<&mut Velocity>,
        Option<&mut RigidBody>
    )>,
    handler: Res<SkipHandler>,
    time: Res<Time>,
    mut skipped: EventWriter<InterpolationSkipped>
) {
    let delta = time.delta_seconds();
    for (e, mut replicator, snapshot, transform, velocity, rigidbody) in query.iter_mut() {
        let mut body = transform.map(|t| RapierBody::new(t, velocity, rigidbody));
        let outcome = replicator.observer_tick(
            e,
            delta,
            snapshot,
            body.as_mut(),
            handler.get()
        );

        if let TickOutcome::Skipped(reason) = outcome {
            debug!("interpolation skipped for {e:?}: {reason}");
            skipped.send(InterpolationSkipped{
                entity: e,
                reason
            });
        }
    }
}

pub(crate) fn add_replicator_systems(app: &mut App, role: NetworkRole) -> &mut App {
    match role {
        NetworkRole::Authority => {
            app.configure_sets(PostUpdate,
                ServerReplicatorSet::Sample
                .before(ServerSet::Send)
            )
            .add_systems(PostUpdate,
                sample_snapshot_system
                .in_set(ServerReplicatorSet::Sample)
            )
        }
        NetworkRole::Observer => {
            app.add_event::<InterpolationSkipped>()
            .init_resource::<SkipHandler>()
            .configure_sets(PreUpdate,
                ClientReplicatorSet::ApplySnapshot
                .after(ClientSet::Receive)
            )
            .add_systems(PreUpdate,
                apply_snapshot_system
                .in_set(ClientReplicatorSet::ApplySnapshot)
            )
            .add_systems(Update,
                blend_system
                .in_set(ClientReplicatorSet::Blend)
            )
        }
    }
}

pub trait TransformReplicatorAppExt {
    fn use_transform_replicator(&mut self) -> &mut Self;

    fn set_interpolation_skip_handler<H: InterpolationSkipHandler>(
        &mut self,
        handler: H
    ) -> &mut Self;
}

impl TransformReplicatorAppExt for App {
    fn use_transform_replicator(&mut self) -> &mut Self {
        let Some(role) = NetworkRole::detect(self.world()) else {
            panic!("could not find replicon server nor client");
        };

        info!("transform replicator running as {role:?}");
        self.replicate::<ServerSnapshot>();
        add_replicator_systems(self, role)
    }

    fn set_interpolation_skip_handler<H: InterpolationSkipHandler>(
        &mut self,
        handler: H
    ) -> &mut Self {
        self.insert_resource(SkipHandler::new(handler))
    }
}

/// Has to be added after the replicon plugins.
pub struct TransformReplicatorPlugin;

impl Plugin for TransformReplicatorPlugin {
    fn build(&self, app: &mut App) {
        app.use_transform_replicator();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        sync::Arc,
        time::Duration
    };
    use approx::assert_relative_eq;
    use super::*;

    const EPSILON: f32 = 1.0e-3;

    #[derive(Resource, Default)]
    struct ChangeCount(usize);

    fn count_changes(
        query: Query<(), Changed<ServerSnapshot>>,
        mut count: ResMut<ChangeCount>
    ) {
        count.0 += query.iter().count();
    }

    fn app_with(role: NetworkRole) -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default());
        add_replicator_systems(&mut app, role);
        app
    }

    fn step(app: &mut App, seconds: f32) {
        app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
        app.update();
    }

    fn replicator_config() -> TransformReplicatorConfig {
        TransformReplicatorConfig{
            min_distance_for_vector_interp: 5.0,
            max_distance_for_interp: 50.0,
            ..default()
        }
    }

    fn spawn_observed(app: &mut App) -> Entity {
        app.world_mut()
        .spawn((
            TransformReplicatorBundle::new(replicator_config(), &Transform::IDENTITY),
            Transform::IDENTITY,
            RigidBody::Dynamic,
            Velocity::zero()
        ))
        .id()
    }

    fn set_snapshot(app: &mut App, e: Entity, location: Vec3) {
        app.world_mut()
        .entity_mut(e)
        .insert(ServerSnapshot{
            location,
            simulating_physics: true,
            ..default()
        });
    }

    fn translation(app: &App, e: Entity) -> Vec3 {
        app.world()
        .get::<Transform>(e)
        .unwrap()
        .translation
    }

    #[test]
    fn authority_publishes_only_changes() {
        let mut app = app_with(NetworkRole::Authority);
        app.init_resource::<ChangeCount>()
        .add_systems(PostUpdate,
            count_changes.after(ServerReplicatorSet::Sample)
        );

        let e = app.world_mut()
        .spawn((
            TransformReplicatorBundle::default(),
            Transform::from_xyz(1.0, 2.0, 3.0),
            RigidBody::Dynamic,
            Velocity::linear(Vec3::new(0.5, 0.0, 0.0))
        ))
        .id();

        step(&mut app, 0.1);
        let snapshot = *app.world().get::<ServerSnapshot>(e).unwrap();
        assert_eq!(snapshot.location, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(snapshot.linear_velocity, Vec3::new(0.5, 0.0, 0.0));
        assert!(snapshot.simulating_physics);
        assert_eq!(app.world().resource::<ChangeCount>().0, 1);

        step(&mut app, 0.1);
        assert_eq!(app.world().resource::<ChangeCount>().0, 1);

        app.world_mut()
        .get_mut::<Transform>(e)
        .unwrap()
        .translation
        .x = 4.0;
        step(&mut app, 0.1);
        assert_eq!(app.world().resource::<ChangeCount>().0, 2);
        assert_eq!(
            app.world().get::<ServerSnapshot>(e).unwrap().location.x,
            4.0
        );
    }

    #[test]
    fn observer_blends_between_snapshots() {
        let mut app = app_with(NetworkRole::Observer);
        let e = spawn_observed(&mut app);

        // first arrival, no interval yet
        step(&mut app, 0.1);
        assert_eq!(translation(&app, e), Vec3::ZERO);
        assert_eq!(*app.world().get::<RigidBody>(e).unwrap(), RigidBody::Dynamic);

        set_snapshot(&mut app, e, Vec3::new(10.0, 0.0, 0.0));
        step(&mut app, 0.05);
        let replicator = app.world().get::<TransformReplicator>(e).unwrap();
        assert_relative_eq!(replicator.interval_between_last_two_snapshots(), 0.1, epsilon = EPSILON);
        assert_relative_eq!(replicator.blend_ratio(), 0.5, epsilon = EPSILON);
        assert!(translation(&app, e).abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPSILON));
        assert_eq!(
            *app.world().get::<RigidBody>(e).unwrap(),
            RigidBody::KinematicPositionBased
        );

        step(&mut app, 0.05);
        assert!(translation(&app, e).abs_diff_eq(Vec3::new(10.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn observer_reports_skips() {
        struct CountingHandler(Arc<AtomicUsize>);
        impl InterpolationSkipHandler for CountingHandler {
            fn on_interpolation_skipped(&self, _: Entity, reason: InterpSkipReason)
            -> InterpSkipReason {
                self.0.fetch_add(1, Ordering::SeqCst);
                reason
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let mut app = app_with(NetworkRole::Observer);
        app.set_interpolation_skip_handler(CountingHandler(calls.clone()));
        let e = spawn_observed(&mut app);

        step(&mut app, 0.1);
        set_snapshot(&mut app, e, Vec3::new(100.0, 0.0, 0.0));
        step(&mut app, 0.05);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let events = app.world().resource::<Events<InterpolationSkipped>>();
        let skipped: Vec<_> = events.iter_current_update_events().copied().collect();
        assert_eq!(skipped, vec![InterpolationSkipped{
            entity: e,
            reason: InterpSkipReason::DistanceTooBig
        }]);
        // left where the arrival placed it
        assert_eq!(translation(&app, e), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn observer_without_transform_is_noop() {
        let mut app = app_with(NetworkRole::Observer);
        let e = app.world_mut()
        .spawn(TransformReplicatorBundle::default())
        .id();

        step(&mut app, 0.1);
        set_snapshot(&mut app, e, Vec3::new(1.0, 0.0, 0.0));
        step(&mut app, 0.1);

        let replicator = app.world().get::<TransformReplicator>(e).unwrap();
        assert_relative_eq!(replicator.interval_between_last_two_snapshots(), 0.1, epsilon = EPSILON);
        assert_relative_eq!(replicator.time_since_last_snapshot(), 0.1, epsilon = EPSILON);
        assert_eq!(replicator.origin().location, Vec3::ZERO);
    }

    #[test]
    fn observer_follows_authority() {
        let mut server = app_with(NetworkRole::Authority);
        let mut client = app_with(NetworkRole::Observer);
        let server_e = server.world_mut()
        .spawn((
            TransformReplicatorBundle::default(),
            Transform::IDENTITY
        ))
        .id();
        let client_e = spawn_observed(&mut client);

        let mut last_sent = None;
        for frame in 0..20 {
            server.world_mut()
            .get_mut::<Transform>(server_e)
            .unwrap()
            .translation
            .x += 1.0;
            step(&mut server, 0.05);

            // low send rate
            if frame % 2 == 0 {
                let snapshot = *server.world().get::<ServerSnapshot>(server_e).unwrap();
                client.world_mut().entity_mut(client_e).insert(snapshot);
                last_sent = Some(snapshot);
            }
            step(&mut client, 0.05);
        }

        let last_sent = last_sent.unwrap();
        assert!(!last_sent.simulating_physics);
        assert!(translation(&client, client_e).abs_diff_eq(last_sent.location, EPSILON));
        assert_relative_eq!(
            client.world().get::<TransformReplicator>(client_e).unwrap()
            .interval_between_last_two_snapshots(),
            0.1,
            epsilon = EPSILON
        );
    }
}

use std::time::Duration;
use bevy::{
    app::ScheduleRunnerPlugin,
    log::LogPlugin,
    prelude::*
};
use bevy_replicon_transform_replicator::dev::{
    config::*,
    game_server::GameServerPlugin
};

fn main() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f32(DEV_SERVER_TICK_DELTA)
        )),
        LogPlugin{
            level: LOG_LEVEL,
            ..default()
        },
        TransformPlugin,
        HierarchyPlugin
    ));

    if let Err(e) = dev_server_builder().build(&mut app) {
        panic!("{e}");
    }
    app.add_plugins(GameServerPlugin)
    .run();
}

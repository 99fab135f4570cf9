use bevy::{log::LogPlugin, prelude::*};
use bevy_replicon_transform_replicator::dev::{
    config::*,
    game_client::GameClientPlugin
};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(LogPlugin{
            level: LOG_LEVEL,
            ..default()
        })
    );

    if let Err(e) = dev_client_builder().build(&mut app) {
        panic!("{e}");
    }
    app.add_plugins(GameClientPlugin)
    .run();
}

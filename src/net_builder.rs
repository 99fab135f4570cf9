pub mod renet_client_builder;
pub mod renet_server_builder;

pub use renet_client_builder::*;
pub use renet_server_builder::*;

use std::time::Duration;
use bevy::{
    prelude::*,
    utils::SystemTime
};
use bevy_replicon::prelude::*;
use bevy_replicon_renet::{
    renet::ConnectionConfig,
    RenetChannelsExt
};

fn connection_config(app: &App) -> ConnectionConfig {
    let channels = app.world().resource::<RepliconChannels>();
    ConnectionConfig{
        server_channels_config: channels.get_server_configs(),
        client_channels_config: channels.get_client_configs(),
        ..default()
    }
}

fn unix_time() -> anyhow::Result<Duration> {
    let now = SystemTime::now()
    .duration_since(SystemTime::UNIX_EPOCH)?;
    Ok(now)
}

pub mod config;
pub mod level;
pub mod game_client;
pub mod game_server;

use bevy::prelude::*;
use bevy_replicon::prelude::*;
use bevy_replicon_renet::renet::transport::NetcodeTransportError;
use serde::{Serialize, Deserialize};
use rand::prelude::*;
use config::*;

use crate::prelude::*;

pub struct GameCommonPlugin;

impl Plugin for GameCommonPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(Rapier3DPlugin{
            delta_time: DEV_SERVER_TICK_DELTA,
            substeps: DEV_PHYSICS_SUBSTEPS
        })
        .replicate::<CubePresentation>();
    }
}

#[derive(Component, Serialize, Deserialize)]
pub struct CubePresentation {
    pub color: [f32; 3]
}

impl CubePresentation {
    #[inline]
    pub fn random() -> Self {
        Self{
            color: [
                random(),
                random(),
                random()
            ]
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

pub fn cube_replicator_config() -> anyhow::Result<TransformReplicatorConfig> {
    let config = TransformReplicatorConfig{
        max_distance_for_interp: DEV_MAX_DISTANCE_FOR_INTERP,
        min_distance_for_vector_interp: DEV_MIN_DISTANCE_FOR_VECTOR_INTERP,
        // cubes come to rest and stop publishing, do not extrapolate past that
        clamp_blend_ratio: true,
        ..default()
    };
    config.validate()?;
    Ok(config)
}

pub fn handle_transport_error(mut errors: EventReader<NetcodeTransportError>) {
    for e in errors.read() {
        panic!("{e}")
    }
}

pub fn error(error: anyhow::Error) {
    panic!("{error}");
}

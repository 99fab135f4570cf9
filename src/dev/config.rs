use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use bevy::{
    log::Level,
    utils::SystemTime
};
use crate::net_builder::{RenetClientBuilder, RenetServerBuilder};
use super::game_client::LoggingSkipHandler;

pub const DEV_SERVER_TICK_DELTA: f32 = 1.0 / 60.0;
pub const DEV_PHYSICS_SUBSTEPS: usize = 1;
// low on purpose so clients have something to blend
pub const DEV_NETWORK_TICK_RATE: u16 = 10;
pub const DEV_SERVER_LISTEN_PORT: u16 = 5000;
pub const DEV_SERVER_MAX_CLIENTS: usize = 10;
pub const DEV_CLIENT_TIME_OUT_SEC: i32 = 15;
pub const DEV_TOKEN_EXPIRE_SEC: u64 = 300;

pub const DEV_CUBE_COUNT: usize = 8;
pub const DEV_CUBE_SIZE: f32 = 2.0;
pub const DEV_CUBE_MASS: f32 = 1.0;
pub const DEV_CUBE_DROP_HEIGHT: f32 = 10.0;
pub const DEV_SPAWN_RANGE: f32 = 20.0;
pub const DEV_IMPULSE_INTERVAL_SEC: f32 = 2.0;
pub const DEV_IMPULSE_STRENGTH: f32 = 8.0;
pub const DEV_TELEPORT_CHANCE: f64 = 0.1;
pub const DEV_TELEPORT_HEIGHT: f32 = 40.0;

pub const DEV_MAX_DISTANCE_FOR_INTERP: f32 = 20.0;
pub const DEV_MIN_DISTANCE_FOR_VECTOR_INTERP: f32 = 2.0;

pub const LOG_LEVEL: Level = Level::INFO;

#[inline]
pub fn get_dev_protocol_id() -> u64 {
    0x7472_616e_7366_6f72
}

#[inline]
pub fn get_dev_private_key() -> [u8; 32] {
    [
        0x2c, 0x91, 0x4e, 0x07, 0xd3, 0x5a, 0x18, 0xbf,
        0x66, 0x0e, 0xa2, 0x73, 0x39, 0xc4, 0x8d, 0x15,
        0xf0, 0x4b, 0x27, 0x9e, 0x52, 0x6a, 0xe1, 0x03,
        0xb8, 0x7d, 0x34, 0xc9, 0x0a, 0x5f, 0x96, 0xe7
    ]
}

pub fn get_dev_client_id() -> u64 {
    match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_millis() as u64,
        Err(e) => panic!("{e}")
    }
}

pub fn dev_server_builder() -> RenetServerBuilder {
    RenetServerBuilder{
        listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEV_SERVER_LISTEN_PORT),
        network_tick_rate: DEV_NETWORK_TICK_RATE,
        protocol_id: get_dev_protocol_id(),
        private_key: get_dev_private_key(),
        max_clients: DEV_SERVER_MAX_CLIENTS
    }
}

pub fn dev_client_builder() -> RenetClientBuilder<LoggingSkipHandler> {
    RenetClientBuilder{
        client_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        server_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEV_SERVER_LISTEN_PORT),
        client_id: get_dev_client_id(),
        protocol_id: get_dev_protocol_id(),
        private_key: get_dev_private_key(),
        timeout_seconds: DEV_CLIENT_TIME_OUT_SEC,
        token_expire_seconds: DEV_TOKEN_EXPIRE_SEC,
        skip_handler: LoggingSkipHandler
    }
}

use std::net::{IpAddr, SocketAddr, UdpSocket};
use bevy::prelude::*;
use bevy_replicon::prelude::*;
use bevy_replicon_renet::{
    client::RepliconRenetClientPlugin,
    renet::{
        transport::{ClientAuthentication, ConnectToken, NetcodeClientTransport},
        RenetClient
    }
};
use crate::{
    core::InterpolationSkipHandler,
    network_transform::{TransformReplicatorAppExt, TransformReplicatorPlugin}
};
use super::{connection_config, unix_time};

/// Observer side: replicon client, renet transport and the blending half of
/// the transform replicator.
pub struct RenetClientBuilder<H: InterpolationSkipHandler> {
    pub client_addr: IpAddr,
    pub server_addr: SocketAddr,
    pub client_id: u64,
    pub protocol_id: u64,
    pub private_key: [u8; 32],
    pub timeout_seconds: i32,
    pub token_expire_seconds: u64,
    pub skip_handler: H
}

impl<H: InterpolationSkipHandler + Clone> RenetClientBuilder<H> {
    pub fn build(&self, app: &mut App) -> anyhow::Result<()> {
        app.add_plugins((
            RepliconPlugins.build()
            .disable::<ServerPlugin>(),
            RepliconRenetClientPlugin
        ))
        .add_plugins(TransformReplicatorPlugin)
        .set_interpolation_skip_handler(self.skip_handler.clone());

        let renet = RenetClient::new(connection_config(app));
        let current_time = unix_time()?;
        let connect_token = ConnectToken::generate(
            current_time,
            self.protocol_id,
            self.token_expire_seconds,
            self.client_id,
            self.timeout_seconds,
            vec![self.server_addr],
            None,
            &self.private_key
        )?;
        let socket = UdpSocket::bind((self.client_addr, 0))?;
        let netcode = NetcodeClientTransport::new(
            current_time,
            ClientAuthentication::Secure{connect_token},
            socket
        )?;

        app.insert_resource(renet)
        .insert_resource(netcode);
        info!("client: {} observing {}", self.client_id, self.server_addr);
        Ok(())
    }
}

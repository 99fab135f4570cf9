use std::net::{SocketAddr, UdpSocket};
use bevy::prelude::*;
use bevy_replicon::prelude::*;
use bevy_replicon_renet::{
    server::RepliconRenetServerPlugin,
    renet::{
        transport::{
            NetcodeServerTransport,
            ServerAuthentication,
            ServerConfig as NetcodeServerConfig
        },
        RenetServer
    }
};
use crate::network_transform::TransformReplicatorPlugin;
use super::{connection_config, unix_time};

/// Authority side: replicon server, renet transport and the sampling half of
/// the transform replicator.
pub struct RenetServerBuilder {
    pub listen_addr: SocketAddr,
    pub network_tick_rate: u16,
    pub protocol_id: u64,
    pub private_key: [u8; 32],
    pub max_clients: usize
}

impl RenetServerBuilder {
    pub fn build(&self, app: &mut App) -> anyhow::Result<()> {
        app.add_plugins((
            RepliconPlugins.build()
            .disable::<ClientPlugin>()
            .set(ServerPlugin{
                tick_policy: TickPolicy::MaxTickRate(self.network_tick_rate),
                visibility_policy: VisibilityPolicy::All,
                ..default()
            }),
            RepliconRenetServerPlugin
        ))
        .add_plugins(TransformReplicatorPlugin);

        let renet = RenetServer::new(connection_config(app));
        let socket = UdpSocket::bind(self.listen_addr)?;
        let netcode = NetcodeServerTransport::new(
            NetcodeServerConfig{
                current_time: unix_time()?,
                max_clients: self.max_clients,
                protocol_id: self.protocol_id,
                authentication: ServerAuthentication::Secure{
                    private_key: self.private_key
                },
                public_addresses: vec![self.listen_addr]
            },
            socket
        )?;

        app.insert_resource(renet)
        .insert_resource(netcode);
        info!(
            "publishing snapshots from {} at {} Hz",
            self.listen_addr, self.network_tick_rate
        );
        Ok(())
    }
}

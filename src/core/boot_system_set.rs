use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ServerReplicatorSet {
    Sample
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ClientReplicatorSet {
    ApplySnapshot,
    Blend
}

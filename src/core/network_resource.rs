use bevy::prelude::*;
use bevy_replicon::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NetworkRole {
    Authority,
    Observer
}

impl NetworkRole {
    pub fn detect(world: &World) -> Option<Self> {
        if world.contains_resource::<RepliconServer>() {
            Some(Self::Authority)
        } else if world.contains_resource::<RepliconClient>() {
            Some(Self::Observer)
        } else {
            None
        }
    }
}

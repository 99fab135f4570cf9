pub mod core;
pub mod physics;
pub mod network_transform;
pub mod net_builder;
pub mod dev;

pub mod prelude {
    pub use crate::{
        core::*,
        physics::*,
        network_transform::*,
        net_builder::*
    };
}

pub mod rapier3d;
pub mod rapier_body;

pub use rapier3d::*;
pub use rapier_body::*;

pub mod boot_system_set;
pub mod interp_method;
pub mod interpolation;
pub mod interpolation_origin;
pub mod network_resource;
pub mod replicated_body;
pub mod replicator_config;
pub mod skip;
pub mod snapshot;
pub mod transform_replicator;

pub use boot_system_set::*;
pub use interp_method::*;
pub use interpolation::*;
pub use interpolation_origin::*;
pub use network_resource::*;
pub use replicated_body::*;
pub use replicator_config::*;
pub use skip::*;
pub use snapshot::*;
pub use transform_replicator::*;

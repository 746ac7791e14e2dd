pub mod instance;

pub use instance::{
    HostDirectories, HostFiles, Instance, InstanceConfig, InstanceDirectories, InstanceError,
    InstanceFiles, InstanceParameters, InstancePorts, MAX_SLUG_LEN, validate_slug,
};

//! Application descriptor and the health report derived from it.
pub mod descriptor;
pub mod health;

pub use descriptor::{AppDescriptor, DescriptorError, DEFAULT_NAME, DEFAULT_VERSION};
pub use health::HealthStatus;

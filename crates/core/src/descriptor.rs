use thiserror::Error;

use crate::health::HealthStatus;

pub const DEFAULT_NAME: &str = "Backend Application";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Named, versioned application instance.
///
/// Both fields are fixed at construction. Every view returned by the
/// descriptor is recomputed from them on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    name: String,
    version: String,
}

/// Errors raised when building a descriptor from caller-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: &'static str,
    },
}

impl AppDescriptor {
    /// Creates the descriptor with the built-in name and version.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Creates a descriptor from externally supplied identity values.
    ///
    /// The name must be non-blank without surrounding whitespace and the
    /// version must look like `MAJOR.MINOR.PATCH`.
    pub fn with_identity(
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let name = name.into();
        let version = version.into();
        validate_name(&name)?;
        validate_version(&version)?;
        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns `Hello from {name} v{version}`.
    pub fn greet(&self) -> String {
        format!("Hello from {} v{}", self.name, self.version)
    }

    /// Builds a fresh health report. The status is always `healthy`.
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus::healthy(&self.name, &self.version)
    }
}

impl Default for AppDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<(), DescriptorError> {
    if name.trim().is_empty() {
        return Err(DescriptorError::InvalidConfiguration {
            field: "name",
            reason: "must not be blank",
        });
    }
    if name.trim() != name {
        return Err(DescriptorError::InvalidConfiguration {
            field: "name",
            reason: "must not have surrounding whitespace",
        });
    }
    Ok(())
}

fn validate_version(version: &str) -> Result<(), DescriptorError> {
    let parts: Vec<&str> = version.split('.').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(DescriptorError::InvalidConfiguration {
            field: "version",
            reason: "must be MAJOR.MINOR.PATCH",
        })
    }
}

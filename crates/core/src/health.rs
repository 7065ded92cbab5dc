use std::fmt;

use serde::{Deserialize, Serialize};

/// Health report derived from an [`AppDescriptor`](crate::AppDescriptor).
///
/// Serialises to an object with exactly the keys `status`, `service` and
/// `version`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    /// Status value reported by every health check.
    pub const HEALTHY: &'static str = "healthy";

    pub(crate) fn healthy(service: &str, version: &str) -> Self {
        Self {
            status: Self::HEALTHY.to_string(),
            service: service.to_string(),
            version: version.to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == Self::HEALTHY
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn serializes_exactly_three_keys() {
        let health = HealthStatus::healthy("svc", "2.3.4");
        let value = serde_json::to_value(&health).expect("health serializes");
        let object = value.as_object().expect("health is a json object");

        assert_eq!(object.len(), 3);
        assert_eq!(object.get("status"), Some(&Value::from("healthy")));
        assert_eq!(object.get("service"), Some(&Value::from("svc")));
        assert_eq!(object.get("version"), Some(&Value::from("2.3.4")));
    }

    #[test]
    fn display_renders_json_in_field_order() {
        let health = HealthStatus::healthy("svc", "2.3.4");
        assert_eq!(
            health.to_string(),
            r#"{"status":"healthy","service":"svc","version":"2.3.4"}"#
        );
    }

    #[test]
    fn deserializes_back_from_rendered_text() {
        let health = HealthStatus::healthy("svc", "2.3.4");
        let parsed: HealthStatus =
            serde_json::from_str(&health.to_string()).expect("rendered text parses");
        assert_eq!(parsed, health);
        assert!(parsed.is_healthy());
    }
}

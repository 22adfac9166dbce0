//! Monitored service targets and their probed health

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probed health of a single backend service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Unknown,
    Healthy,
    Unhealthy,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Unknown => write!(f, "unknown"),
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// One monitored backend service
///
/// The target list is fixed at startup; only `status` ever changes, and only
/// by wholesale snapshot replacement per probe cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTarget {
    pub name: String,
    pub probe_url: String,
    pub status: HealthStatus,
}

impl ServiceTarget {
    pub fn new(name: &str, probe_url: &str) -> Self {
        Self {
            name: name.to_string(),
            probe_url: probe_url.to_string(),
            status: HealthStatus::Unknown,
        }
    }

    /// The monitored platform services, in display order
    pub fn defaults() -> Vec<ServiceTarget> {
        vec![
            ServiceTarget::new("Auth Service", "/api/auth/health"),
            ServiceTarget::new("Users Service", "/api/users/health"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_start_unknown_in_configured_order() {
        let targets = ServiceTarget::defaults();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].name, "Auth Service");
        assert_eq!(targets[0].probe_url, "/api/auth/health");
        assert_eq!(targets[1].name, "Users Service");
        assert_eq!(targets[1].probe_url, "/api/users/health");
        assert!(targets.iter().all(|t| t.status == HealthStatus::Unknown));
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(HealthStatus::Unknown.to_string(), "unknown");
        assert_eq!(HealthStatus::Healthy.to_string(), "healthy");
        assert_eq!(HealthStatus::Unhealthy.to_string(), "unhealthy");
    }
}

//! Composite health report.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Overall gateway health derived from its sub-probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Ok,
    Degraded,
    Error,
}

/// Result of a single sub-probe.
///
/// Serialized as `"OK"` or as the failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Ok,
    Failed(String),
}

impl ProbeStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ok => serializer.serialize_str("OK"),
            Self::Failed(message) => serializer.serialize_str(message),
        }
    }
}

/// Merged storage and upstream health.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub overall_status: OverallStatus,
    pub storage_status: ProbeStatus,
    pub upstream_status: ProbeStatus,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// Builds a report, deriving the overall status.
    ///
    /// Storage failure is an error regardless of the upstream; an upstream
    /// failure alone only degrades the gateway.
    pub fn new(storage_status: ProbeStatus, upstream_status: ProbeStatus) -> Self {
        let overall_status = match (storage_status.is_ok(), upstream_status.is_ok()) {
            (false, _) => OverallStatus::Error,
            (true, false) => OverallStatus::Degraded,
            (true, true) => OverallStatus::Ok,
        };

        Self {
            overall_status,
            storage_status,
            upstream_status,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> ProbeStatus {
        ProbeStatus::Failed(msg.to_string())
    }

    #[test]
    fn test_overall_status_matrix() {
        assert_eq!(
            HealthReport::new(ProbeStatus::Ok, ProbeStatus::Ok).overall_status,
            OverallStatus::Ok
        );
        assert_eq!(
            HealthReport::new(ProbeStatus::Ok, failed("refused")).overall_status,
            OverallStatus::Degraded
        );
        assert_eq!(
            HealthReport::new(failed("db down"), ProbeStatus::Ok).overall_status,
            OverallStatus::Error
        );
        assert_eq!(
            HealthReport::new(failed("db down"), failed("refused")).overall_status,
            OverallStatus::Error
        );
    }

    #[test]
    fn test_serialization() {
        let report = HealthReport::new(ProbeStatus::Ok, failed("connection refused"));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["overallStatus"], "DEGRADED");
        assert_eq!(value["storageStatus"], "OK");
        assert_eq!(value["upstreamStatus"], "connection refused");
        assert!(value["timestamp"].is_string());
    }
}

//! Composite health probing of storage and the upstream scraper.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::domain::entities::{HealthReport, ProbeStatus};
use crate::domain::repositories::LeagueRepository;
use crate::domain::upstream::StatsUpstream;

/// Probes storage and the upstream on demand and merges the results.
///
/// Both probes run concurrently, each bounded by the health timeout. Probe
/// failures become status values in the report; [`HealthAggregator::probe`]
/// never fails.
pub struct HealthAggregator {
    storage: Arc<dyn LeagueRepository>,
    upstream: Arc<dyn StatsUpstream>,
    timeout: Duration,
}

impl HealthAggregator {
    /// Creates a new aggregator.
    pub fn new(
        storage: Arc<dyn LeagueRepository>,
        upstream: Arc<dyn StatsUpstream>,
        timeout: Duration,
    ) -> Self {
        Self {
            storage,
            upstream,
            timeout,
        }
    }

    /// Probes both collaborators and builds a report.
    pub async fn probe(&self) -> HealthReport {
        let (storage_status, upstream_status) =
            tokio::join!(self.probe_storage(), self.probe_upstream());

        let report = HealthReport::new(storage_status, upstream_status);
        tracing::debug!(overall = ?report.overall_status, "Health probed");
        report
    }

    async fn probe_storage(&self) -> ProbeStatus {
        match timeout(self.timeout, self.storage.ping()).await {
            Ok(Ok(())) => ProbeStatus::Ok,
            Ok(Err(e)) => {
                tracing::warn!("Storage probe failed: {}", e);
                ProbeStatus::Failed(e.to_string())
            }
            Err(_) => {
                tracing::warn!("Storage probe timed out after {:?}", self.timeout);
                ProbeStatus::Failed(format!(
                    "Storage did not respond within {}s",
                    self.timeout.as_secs_f64()
                ))
            }
        }
    }

    async fn probe_upstream(&self) -> ProbeStatus {
        // The client enforces the same deadline; the outer timeout also covers
        // implementations that do not.
        match timeout(self.timeout, self.upstream.check_health(self.timeout)).await {
            Ok(Ok(())) => ProbeStatus::Ok,
            Ok(Err(e)) => {
                tracing::warn!("Scraper probe failed: {}", e);
                ProbeStatus::Failed(e.to_string())
            }
            Err(_) => ProbeStatus::Failed(format!(
                "Scraper did not respond within {}s",
                self.timeout.as_secs_f64()
            )),
        }
    }
}

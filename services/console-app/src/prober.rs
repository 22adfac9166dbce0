//! Health prober: concurrent probe cycles on a fixed cadence

use futures::channel::oneshot;
use futures::future::join_all;
use futures::{FutureExt, Stream, StreamExt};

use crate::api::HttpClient;
use crate::model::{HealthStatus, ServiceTarget};

/// Cadence of the probe cycles
pub const PROBE_INTERVAL_MS: u32 = 30_000;

/// Probe every target once, concurrently, and return the refreshed snapshot.
///
/// All probes settle before the snapshot is produced. A success-class
/// response is `Healthy`; anything else (transport error, non-2xx, timeout)
/// is `Unhealthy`. Length and ordering match the input list.
pub async fn run_cycle<C>(targets: &[ServiceTarget], client: &C) -> Vec<ServiceTarget>
where
    C: HttpClient + ?Sized,
{
    let probes = targets.iter().map(|target| async move {
        let status = match client.get(&target.probe_url).await {
            Ok(response) if response.is_success() => HealthStatus::Healthy,
            Ok(response) => {
                tracing::debug!("Probe '{}' returned status {}", target.name, response.status);
                HealthStatus::Unhealthy
            }
            Err(e) => {
                tracing::debug!("Probe '{}' failed: {}", target.name, e);
                HealthStatus::Unhealthy
            }
        };
        ServiceTarget {
            status,
            ..target.clone()
        }
    });

    join_all(probes).await
}

/// Drive probe cycles until torn down: one cycle immediately, then one more
/// per element of `ticks`.
///
/// `cancel` winning the race against an in-flight cycle discards that
/// cycle's snapshot; after cancellation no further probes are issued.
/// `publish` returning false means the view is gone and stops the loop, as
/// does exhaustion of the tick stream.
pub async fn poll_loop<C, S, P>(
    targets: Vec<ServiceTarget>,
    client: &C,
    mut ticks: S,
    mut cancel: oneshot::Receiver<()>,
    mut publish: P,
) where
    C: HttpClient + ?Sized,
    S: Stream<Item = ()> + Unpin,
    P: FnMut(Vec<ServiceTarget>) -> bool,
{
    loop {
        let cycle = run_cycle(&targets, client).fuse();
        futures::pin_mut!(cycle);
        let snapshot = futures::select! {
            snapshot = cycle => snapshot,
            _ = cancel => break,
        };

        if !publish(snapshot) {
            tracing::debug!("View disposed, stopping health polling");
            break;
        }

        let mut next_tick = ticks.next().fuse();
        futures::select! {
            tick = next_tick => {
                if tick.is_none() {
                    break;
                }
            }
            _ = cancel => break,
        }
    }
}

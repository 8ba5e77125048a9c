// Repeating fetch driver: one fetch at startup, one per refresh period, plus
// any manual refreshes. Fetches are spawned detached and never cancelled, so
// two overlapping requests race and the last snapshot to complete wins.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::market_data::{MarketEvent, MarketSource};

/// Drive `source` until `shutdown` flips. The first interval tick completes
/// immediately, which is the startup fetch.
pub async fn run(
    source: Arc<dyn MarketSource>,
    events: mpsc::Sender<MarketEvent>,
    mut refresh: mpsc::Receiver<()>,
    mut shutdown: watch::Receiver<bool>,
    period: Duration,
) {
    let mut ticker = interval(period);
    info!(period_secs = period.as_secs(), "market poller started");

    loop {
        tokio::select! {
            _ = ticker.tick() => spawn_fetch(Arc::clone(&source), events.clone()),
            Some(()) = refresh.recv() => spawn_fetch(Arc::clone(&source), events.clone()),
            _ = shutdown.changed() => break,
        }
    }

    info!("market poller stopped");
}

fn spawn_fetch(source: Arc<dyn MarketSource>, events: mpsc::Sender<MarketEvent>) {
    tokio::spawn(async move {
        if events.send(MarketEvent::FetchStarted).await.is_err() {
            return; // dashboard is gone
        }
        match source.fetch_markets().await {
            Ok(quotes) => {
                let _ = events.send(MarketEvent::Snapshot { quotes }).await;
            }
            Err(e) => {
                // Swallowed on purpose: stale quotes stay on screen, the
                // error only reaches the diagnostic channel.
                warn!(error = %e, "market fetch failed, keeping previous quotes");
                let _ = events.send(MarketEvent::FetchFailed).await;
            }
        }
    });
}

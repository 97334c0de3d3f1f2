use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{oneshot, watch};
use tracing::debug;

use pkg_types::config::AgentConfigFile;

/// How often the background task re-checks the informer's sync state.
const SYNC_POLL_PERIOD: Duration = Duration::from_millis(100);

/// Feature support detected from the apiserver version at startup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClusterCapabilities {
    /// Whether the apiserver serves the discovery EndpointSlice API.
    #[serde(default)]
    pub endpoint_slice: bool,
}

/// Whether the agent should watch and process EndpointSlice objects at all:
/// the cluster must support the API and the local configuration must not
/// disable it.
pub fn supports_endpoint_slice(caps: &ClusterCapabilities, config: &AgentConfigFile) -> bool {
    caps.endpoint_slice && config.enable_endpoint_slice
}

/// One-shot signal set by the watch layer when it sees its first
/// EndpointSlice object. Clones share the same underlying signal.
#[derive(Clone)]
pub struct SliceObserved {
    tx: Arc<watch::Sender<bool>>,
}

impl SliceObserved {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Record that a slice object has been observed. Idempotent.
    pub fn mark(&self) {
        self.tx.send_replace(true);
    }

    /// Non-blocking check of the signal.
    pub fn is_marked(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until the signal is marked. Completes immediately if it already
    /// is.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in self, so the channel cannot close mid-wait.
        rx.wait_for(|marked| *marked).await.ok();
    }
}

impl Default for SliceObserved {
    fn default() -> Self {
        Self::new()
    }
}

/// Sync state of an informer cache, as exposed by the watch layer.
pub trait CacheSync: Send + Sync + 'static {
    fn has_synced(&self) -> bool;
}

impl<F> CacheSync for F
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    fn has_synced(&self) -> bool {
        self()
    }
}

/// Whether the cluster is actually emitting EndpointSlice objects.
///
/// Returns true as soon as one object has been observed, even while the
/// cache is still syncing. Returns false only once the cache has fully
/// synced without a single object observed; every cluster serves at least
/// the apiserver's own endpoints, so an empty synced cache means the
/// discovery API is not enabled. When both signals become ready in the same
/// instant the observation wins: the synced branch re-checks the signal
/// once, non-blockingly, before concluding false.
///
/// The background sync-wait task is not cancelable; it terminates on its
/// own once the cache reports synced.
pub async fn has_endpoint_slice(observed: &SliceObserved, cache: impl CacheSync) -> bool {
    let (synced_tx, synced_rx) = oneshot::channel();
    tokio::spawn(async move {
        while !cache.has_synced() {
            tokio::time::sleep(SYNC_POLL_PERIOD).await;
        }
        let _ = synced_tx.send(());
    });

    let verdict = tokio::select! {
        _ = observed.wait() => true,
        _ = synced_rx => observed.is_marked(),
    };
    debug!("EndpointSlice detection finished: present={}", verdict);
    verdict
}

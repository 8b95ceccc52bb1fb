use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::events::structs::event_bus::EventBus;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::peer_store::PeerStore;

/// The tracker orchestrator.
///
/// Owns the configuration, the peer store and the event bus wired with
/// the pipeline stages. One instance serves every request; per-request
/// state lives in the [`EventContext`](crate::events::structs::event_context::EventContext)
/// built for each announce or scrape.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub store: Arc<dyn PeerStore>,
    pub stats: Arc<StatsAtomics>,
    pub bus: EventBus,
}

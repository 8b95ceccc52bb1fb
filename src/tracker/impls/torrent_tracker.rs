use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use bip_bencode::{ben_bytes, ben_map, BMutAccess};
use log::debug;
use crate::common::enums::tracker_error::TrackerError;
use crate::config::structs::configuration::Configuration;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::structs::memory_peer_store::MemoryPeerStore;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::announce_handler::AnnounceHandler;
use crate::tracker::structs::registry_operations::RegistryOperations;
use crate::tracker::structs::request_validator::{RequestValidator, ValidationRules};
use crate::tracker::structs::scrape_handler::ScrapeHandler;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// A tracker backed by the built-in in-memory store.
    pub fn new(config: Arc<Configuration>) -> TorrentTracker {
        Self::with_store(config, Arc::new(MemoryPeerStore::new()))
    }

    /// Wires the pipeline onto the bus. The registration list is fixed at
    /// startup; the bus is never mutated afterwards.
    pub fn with_store(config: Arc<Configuration>, store: Arc<dyn PeerStore>) -> TorrentTracker {
        let mut bus = EventBus::new();

        let validator = Arc::new(RequestValidator::new(ValidationRules::default()));
        let registry = Arc::new(RegistryOperations);
        let announce = Arc::new(AnnounceHandler::new(&config.tracker_config));
        let scrape = Arc::new(ScrapeHandler);

        bus.subscribe(TrackerEvent::Announce, announce, 1);
        bus.subscribe(TrackerEvent::Scrape, scrape, 1);
        bus.subscribe(TrackerEvent::RequestValidate, validator, 1);
        for event in [
            TrackerEvent::TorrentRegister,
            TrackerEvent::PeerRegister,
            TrackerEvent::PeerUpdate,
            TrackerEvent::PeerDelete,
            TrackerEvent::PeerComplete,
        ] {
            bus.subscribe(event, registry.clone(), 1);
        }

        TorrentTracker {
            config,
            store,
            stats: Arc::new(StatsAtomics::new()),
            bus,
        }
    }

    /// Runs one announce through the pipeline. The returned bytes are the
    /// bencoded response body; any stage failure surfaces here and is
    /// turned into the failure dictionary by the caller.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn handle_announce(&self, remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>) -> Result<Vec<u8>, TrackerError> {
        debug!("[HANDLE ANNOUNCE] request from {}", remote_addr);
        let mut ctx = EventContext::new(remote_addr, query, self.store.clone());
        self.bus.publish(TrackerEvent::Announce, &mut ctx)?;
        ctx.response.ok_or(TrackerError::ProtocolState("tracker produced no response"))
    }

    /// Runs one scrape through the pipeline.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn handle_scrape(&self, remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>) -> Result<Vec<u8>, TrackerError> {
        debug!("[HANDLE SCRAPE] request from {}", remote_addr);
        let mut ctx = EventContext::new(remote_addr, query, self.store.clone());
        self.bus.publish(TrackerEvent::Scrape, &mut ctx)?;
        ctx.response.ok_or(TrackerError::ProtocolState("tracker produced no response"))
    }

    /// The bencoded `failure reason` dictionary. Every failed request
    /// still answers the client with this body.
    pub fn failure_reason(message: &str) -> Vec<u8> {
        ben_map! {
            "failure reason" => ben_bytes!(message.to_string())
        }.encode()
    }
}

use std::collections::BTreeMap;
use crate::common::enums::tracker_error::TrackerError;
use crate::common::structs::number_of_bytes::NumberOfBytes;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;
use crate::events::traits::pipeline_stage::PipelineStage;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_handler::ScrapeHandler;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::scrape_response::ScrapeResponse;
use crate::tracker::structs::swarm_stats::SwarmStats;

impl ScrapeHandler {
    /// Page size used when enumerating every torrent the store knows.
    const SCRAPE_PAGE_SIZE: usize = 100;

    fn parse_request(ctx: &EventContext) -> Result<ScrapeQueryRequest, TrackerError> {
        let mut info_hash = Vec::new();
        if let Some(values) = ctx.query.get("info_hash") {
            for hash in values {
                if hash.len() != 20 {
                    return Err(TrackerError::Validation("invalid info_hash: expected 20 bytes".to_string()));
                }
                info_hash.push(InfoHash::from(hash.as_slice()));
            }
        }
        Ok(ScrapeQueryRequest { info_hash })
    }

    fn swarm_stats(store: &dyn PeerStore, info_hash: &InfoHash) -> SwarmStats {
        let peers = store.list_peers(info_hash, None, None);
        let complete = peers.iter().filter(|peer| peer.left == NumberOfBytes(0)).count() as u64;
        SwarmStats {
            complete,
            incomplete: peers.len() as u64 - complete,
            downloaded: store.count_downloads(info_hash).unwrap_or(0),
        }
    }

    /// Aggregates swarm counters for the requested hashes, or for every
    /// known torrent when none were given. Unknown hashes are skipped
    /// silently; enumerated torrents need no existence re-check.
    #[tracing::instrument(level = "debug", skip_all)]
    fn scrape(&self, ctx: &mut EventContext) -> Result<(), TrackerError> {
        let request = Self::parse_request(ctx)?;
        let mut files = BTreeMap::new();

        if request.info_hash.is_empty() {
            let total = ctx.store.count_torrents();
            let mut collected = 0;
            let mut page = 1;
            while collected < total {
                let chunk = ctx.store.list_torrents(page, Self::SCRAPE_PAGE_SIZE);
                if chunk.is_empty() {
                    break;
                }
                collected += chunk.len();
                for info_hash in chunk {
                    files.insert(info_hash, Self::swarm_stats(ctx.store.as_ref(), &info_hash));
                }
                page += 1;
            }
        } else {
            for info_hash in request.info_hash.iter() {
                if !ctx.store.torrent_exists(info_hash) {
                    continue;
                }
                files.insert(*info_hash, Self::swarm_stats(ctx.store.as_ref(), info_hash));
            }
        }

        ctx.scrape = Some(request);
        ctx.response = Some(ScrapeResponse { files }.encode());

        Ok(())
    }
}

impl PipelineStage for ScrapeHandler {
    fn handle(&self, event: TrackerEvent, _bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError> {
        match event {
            TrackerEvent::Scrape => self.scrape(ctx),
            _ => Ok(()),
        }
    }
}

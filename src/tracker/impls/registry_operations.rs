use log::debug;
use crate::common::enums::tracker_error::TrackerError;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;
use crate::events::traits::pipeline_stage::PipelineStage;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::registry_operations::RegistryOperations;

impl RegistryOperations {
    fn announce_request(ctx: &EventContext) -> Result<AnnounceQueryRequest, TrackerError> {
        ctx.announce.clone()
            .ok_or(TrackerError::ProtocolState("registry operation without a validated announce"))
    }
}

impl PipelineStage for RegistryOperations {
    /// Executes the store mutation named by `event`.
    ///
    /// Registration calls tolerate "already exists": a repeated `started`
    /// and the lost side of a concurrent register race are both routine.
    /// A failed update or delete means the peer vanished between the
    /// engine's existence check and this call, which is equally routine.
    /// A failed completion is different: the peer was either never
    /// registered or is already counted as a seeder, and counting it
    /// again would corrupt the download statistics.
    fn handle(&self, event: TrackerEvent, _bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError> {
        let request = Self::announce_request(ctx)?;

        match event {
            TrackerEvent::TorrentRegister => {
                if !ctx.store.register_torrent(&request.info_hash) {
                    debug!("[REGISTRY] torrent {} was already registered", request.info_hash);
                }
            }
            TrackerEvent::PeerRegister => {
                let peer = request.to_peer(AnnounceEvent::Started);
                if !ctx.store.register_peer(&request.info_hash, &peer) {
                    debug!("[REGISTRY] peer {} already in swarm {}", request.peer_id, request.info_hash);
                }
            }
            TrackerEvent::PeerUpdate => {
                let peer = request.to_peer(AnnounceEvent::None);
                if !ctx.store.update_peer(&request.info_hash, &peer) {
                    debug!("[REGISTRY] peer {} left swarm {} before the update", request.peer_id, request.info_hash);
                }
            }
            TrackerEvent::PeerDelete => {
                if !ctx.store.delete_peer(&request.info_hash, &request.peer_id) {
                    debug!("[REGISTRY] peer {} already gone from swarm {}", request.peer_id, request.info_hash);
                }
            }
            TrackerEvent::PeerComplete => {
                let peer = request.to_peer(AnnounceEvent::Completed);
                if !ctx.store.mark_peer_complete(&request.info_hash, &peer) {
                    return Err(TrackerError::ProtocolState("peer already completed"));
                }
            }
            _ => {}
        }

        Ok(())
    }
}

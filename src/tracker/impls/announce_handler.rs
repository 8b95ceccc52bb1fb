use crate::common::enums::tracker_error::TrackerError;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;
use crate::events::traits::pipeline_stage::PipelineStage;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_handler::AnnounceHandler;
use crate::tracker::structs::announce_response::AnnounceResponse;

impl AnnounceHandler {
    pub fn new(config: &TrackerConfig) -> AnnounceHandler {
        AnnounceHandler {
            interval: config.request_interval,
            auto_register: config.auto_register,
            max_give: config.peers_returned as usize,
        }
    }

    /// The announce decision procedure.
    ///
    /// Validation first, then the torrent existence gate, then one
    /// registry mutation picked from the client's event and whether the
    /// peer is already known. `stopped` and `completed` are only honored
    /// for known peers; a keep-alive for an unknown peer is a protocol
    /// violation, not an implicit registration. Whatever branch ran, the
    /// response carries the swarm's other peers.
    #[tracing::instrument(level = "debug", skip_all)]
    fn announce(&self, bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError> {
        bus.publish(TrackerEvent::RequestValidate, ctx)?;

        let Some(request) = ctx.announce.clone() else {
            return Err(TrackerError::Validation("announce request was not validated".to_string()));
        };

        if !ctx.store.torrent_exists(&request.info_hash) {
            if self.auto_register {
                bus.publish(TrackerEvent::TorrentRegister, ctx)?;
            } else {
                return Err(TrackerError::ProtocolState("torrent not found"));
            }
        }

        let peer_exists = ctx.store.peer_exists(&request.info_hash, &request.peer_id);

        match (request.event, peer_exists) {
            (AnnounceEvent::Stopped, true) => bus.publish(TrackerEvent::PeerDelete, ctx)?,
            (AnnounceEvent::Completed, true) => bus.publish(TrackerEvent::PeerComplete, ctx)?,
            (AnnounceEvent::Started, _) => bus.publish(TrackerEvent::PeerRegister, ctx)?,
            (_, true) => bus.publish(TrackerEvent::PeerUpdate, ctx)?,
            (_, false) => return Err(TrackerError::ProtocolState("unexpected peer state")),
        }

        // the store is asked to enforce the limit; the cut below guards
        // against an adapter that ignores it
        let mut peers = ctx.store.list_peers(&request.info_hash, Some(self.max_give), Some(&request.peer_id));
        peers.truncate(self.max_give);

        let response = AnnounceResponse::from_peers(self.interval, &peers, request.compact, request.no_peer_id)?;
        ctx.response = Some(response.encode());

        Ok(())
    }
}

impl PipelineStage for AnnounceHandler {
    fn handle(&self, event: TrackerEvent, bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError> {
        match event {
            TrackerEvent::Announce => self.announce(bus, ctx),
            _ => Ok(()),
        }
    }
}

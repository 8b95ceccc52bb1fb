use std::fmt;
use std::fmt::Formatter;
use crate::events::enums::tracker_event::TrackerEvent;

impl fmt::Display for TrackerEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            TrackerEvent::Announce => "tracker.announce",
            TrackerEvent::Scrape => "tracker.scrape",
            TrackerEvent::RequestValidate => "request.validate",
            TrackerEvent::TorrentRegister => "torrent.register",
            TrackerEvent::PeerRegister => "peer.register",
            TrackerEvent::PeerUpdate => "peer.update",
            TrackerEvent::PeerDelete => "peer.delete",
            TrackerEvent::PeerComplete => "peer.complete",
        };
        write!(f, "{}", name)
    }
}

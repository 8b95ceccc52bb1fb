use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use crate::events::structs::event_context::EventContext;
use crate::store::traits::peer_store::PeerStore;

impl EventContext {
    pub fn new(remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>, store: Arc<dyn PeerStore>) -> EventContext {
        EventContext {
            remote_addr,
            query,
            announce: None,
            scrape: None,
            response: None,
            store,
            stopped: false,
        }
    }

    /// Suppresses the remaining handlers of the current publish call.
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped
    }

    pub(crate) fn take_stopped(&mut self) -> bool {
        std::mem::take(&mut self.stopped)
    }
}

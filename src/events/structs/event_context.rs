use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;

/// Shared state for one request traveling through the pipeline.
///
/// Carries the raw query map as parsed by the transport, the typed
/// requests once a stage has produced them, the peer store handle and
/// the response body under construction. Stages exchange data only
/// through this context.
pub struct EventContext {
    pub remote_addr: IpAddr,
    pub query: HashMap<String, Vec<Vec<u8>>>,
    pub announce: Option<AnnounceQueryRequest>,
    pub scrape: Option<ScrapeQueryRequest>,
    pub response: Option<Vec<u8>>,
    pub store: Arc<dyn PeerStore>,
    pub(crate) stopped: bool,
}

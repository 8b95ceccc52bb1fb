//! Implementation blocks for tracker data structures.

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, FromStr, Serialize, Deserialize.
pub mod peer_id;

/// AnnounceEvent implementation: query-value parsing and Display.
pub mod announce_event;

/// AnnounceQueryRequest implementation: peer record construction.
pub mod announce_query_request;

/// Announce response building and bencoding, including compact packing.
pub mod announce_response;

/// Scrape response bencoding.
pub mod scrape_response;

/// The validation stage.
pub mod request_validator;

/// The registry mutation stage.
pub mod registry_operations;

/// The announce stage.
pub mod announce_handler;

/// The scrape stage.
pub mod scrape_handler;

/// Orchestrator wiring and the announce/scrape entry points.
pub mod torrent_tracker;

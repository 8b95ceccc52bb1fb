/// The in-memory storage adapter.
pub mod memory_peer_store;

/// Per-torrent record held by the in-memory adapter.
pub mod torrent_record;

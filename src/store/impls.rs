/// Contract implementation for the in-memory adapter.
pub mod memory_peer_store;

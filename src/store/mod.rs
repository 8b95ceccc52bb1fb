//! Peer and torrent storage.
//!
//! The tracker core only talks to storage through the
//! [`traits::peer_store::PeerStore`] contract; any backend satisfying it
//! can be plugged into the orchestrator. The built-in
//! [`structs::memory_peer_store::MemoryPeerStore`] keeps everything in a
//! lock-guarded map and is the default for a standalone tracker.

/// The storage contract.
pub mod traits;

/// Storage data structures.
pub mod structs;

/// Implementation blocks for the built-in adapter.
pub mod impls;

/// Unit tests for the storage contract.
pub mod tests;

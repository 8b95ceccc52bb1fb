//! Core tracker logic.
//!
//! This module contains everything between the transport and the store:
//! the identifier and peer value types, the pipeline stages (request
//! validation, registry mutations, announce and scrape handling), the
//! response builders with the compact peer-list encoding, and the
//! [`structs::torrent_tracker::TorrentTracker`] facade that wires the
//! stages onto the event bus.
//!
//! # Announce lifecycle
//!
//! A validated announce is interpreted against the store: `stopped`
//! deletes the peer, `completed` marks it a seeder and counts the
//! download, `started` registers it (idempotently), anything else is a
//! keep-alive update for a peer the tracker must already know. An
//! unknown peer on a keep-alive is rejected rather than silently
//! re-registered.

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Unit tests for the tracker core.
pub mod tests;

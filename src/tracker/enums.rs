/// Announce event types from the BitTorrent protocol.
///
/// - `None` - Regular keep-alive update
/// - `Started` - Download started
/// - `Stopped` - Download stopped
/// - `Completed` - Download completed (became a seeder)
pub mod announce_event;

/// Serde serialization definition for AnnounceEvent.
pub mod announce_event_def;

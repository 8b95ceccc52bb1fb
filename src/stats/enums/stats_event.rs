use serde::{Deserialize, Serialize};

/// The counters [`TorrentTracker::update_stats`](crate::tracker::structs::torrent_tracker::TorrentTracker)
/// can move.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Tcp4ConnectionsHandled,
    Tcp4AnnouncesHandled,
    Tcp4ScrapesHandled,
    Tcp4Failure,
    Tcp6ConnectionsHandled,
    Tcp6AnnouncesHandled,
    Tcp6ScrapesHandled,
    Tcp6Failure,
}

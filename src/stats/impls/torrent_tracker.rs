use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            tcp4_connections_handled: self.stats.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_announces_handled: self.stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_scrapes_handled: self.stats.tcp4_scrapes_handled.load(Ordering::SeqCst),
            tcp4_failure: self.stats.tcp4_failure.load(Ordering::SeqCst),
            tcp6_connections_handled: self.stats.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.stats.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_scrapes_handled: self.stats.tcp6_scrapes_handled.load(Ordering::SeqCst),
            tcp6_failure: self.stats.tcp6_failure.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) {
        let counter = match event {
            StatsEvent::Tcp4ConnectionsHandled => &self.stats.tcp4_connections_handled,
            StatsEvent::Tcp4AnnouncesHandled => &self.stats.tcp4_announces_handled,
            StatsEvent::Tcp4ScrapesHandled => &self.stats.tcp4_scrapes_handled,
            StatsEvent::Tcp4Failure => &self.stats.tcp4_failure,
            StatsEvent::Tcp6ConnectionsHandled => &self.stats.tcp6_connections_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.stats.tcp6_announces_handled,
            StatsEvent::Tcp6ScrapesHandled => &self.stats.tcp6_scrapes_handled,
            StatsEvent::Tcp6Failure => &self.stats.tcp6_failure,
        };
        counter.fetch_add(value, Ordering::SeqCst);
    }
}

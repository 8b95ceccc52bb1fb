/// The events a pipeline stage can subscribe to.
///
/// `Announce` and `Scrape` are the two entry points published by the
/// orchestrator; the remaining events are published from within the
/// announce stage to sequence validation and the individual registry
/// mutations.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum TrackerEvent {
    Announce,
    Scrape,
    RequestValidate,
    TorrentRegister,
    PeerRegister,
    PeerUpdate,
    PeerDelete,
    PeerComplete,
}

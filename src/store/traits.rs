/// The storage contract the tracker core depends on.
pub mod peer_store;

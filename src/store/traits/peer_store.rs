use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Durable mapping from a torrent to its swarm.
///
/// Every mutating operation reports "precondition not met" (torrent or
/// peer missing, already present, and so on) by returning `false` rather
/// than raising: a nonexistent torrent on an announce is routine, and the
/// registry engine branches on these booleans instead of unwinding.
/// Adapters fold their own internal failures into the same convention:
/// a failed lookup reads as absent, a failed mutation as `false`, and
/// `list_peers` returns an empty list, never an error.
///
/// Each individual operation must be atomic per (info hash, peer id);
/// composite call sequences in the engine are deliberately not
/// transactional, and the engine tolerates the resulting races through
/// the `false` returns.
pub trait PeerStore: Send + Sync {
    fn torrent_exists(&self, info_hash: &InfoHash) -> bool;

    /// Registers a torrent. `false` if it already exists (no overwrite).
    fn register_torrent(&self, info_hash: &InfoHash) -> bool;

    /// Removes a torrent. `false` if it did not exist. The built-in
    /// adapter drops the peer map with the torrent, but callers must not
    /// rely on the cascade: peer deletion stays the engine's explicit job.
    fn delete_torrent(&self, info_hash: &InfoHash) -> bool;

    fn peer_exists(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool;

    /// Adds a peer to a torrent's swarm. `false` if the torrent does not
    /// exist or a peer with this id is already registered; never creates
    /// the torrent as a side effect.
    fn register_peer(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool;

    /// Overwrites an existing peer's address and transfer counters.
    /// `false` if the torrent or the peer is missing.
    fn update_peer(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool;

    /// `false` if the torrent or the peer is missing.
    fn delete_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool;

    /// Applies the peer update with `left` forced to zero and increments
    /// the torrent's download counter by exactly one, atomically. `false`
    /// without touching the counter when the update cannot be applied:
    /// torrent or peer missing, or the peer is already a seeder (there is
    /// no transition to count).
    fn mark_peer_complete(&self, info_hash: &InfoHash, peer: &TorrentPeer) -> bool;

    /// Up to `limit` peers of the swarm, excluding `exclude` when given.
    /// Empty list (never an error) for an unknown torrent. Any stable
    /// order is acceptable.
    fn list_peers(&self, info_hash: &InfoHash, limit: Option<usize>, exclude: Option<&PeerId>) -> Vec<TorrentPeer>;

    /// One page of known info hashes, 1-indexed. While the underlying set
    /// is unchanged, concatenating all pages at a fixed page size yields
    /// every torrent exactly once.
    fn list_torrents(&self, page: usize, page_size: usize) -> Vec<InfoHash>;

    fn count_torrents(&self) -> usize;

    /// Download count for a torrent; `None` is the explicit "torrent not
    /// found" signal, distinct from a legitimate zero.
    fn count_downloads(&self, info_hash: &InfoHash) -> Option<u64>;
}

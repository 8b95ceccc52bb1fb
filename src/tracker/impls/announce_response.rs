use std::net::IpAddr;
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use crate::common::enums::tracker_error::TrackerError;
use crate::common::structs::number_of_bytes::NumberOfBytes;
use crate::tracker::structs::announce_response::{AnnouncePeerEntry, AnnouncePeerList, AnnounceResponse};
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Packs peers into the compact wire form: 4 bytes IPv4 address followed
/// by 2 bytes port, both big-endian, concatenated without delimiters.
/// Only IPv4 peers can be packed; an IPv6 address here is a hard error,
/// never a silently mangled entry.
fn compact_peer_bytes(peers: &[TorrentPeer]) -> Result<Vec<u8>, TrackerError> {
    let mut buffer = Vec::with_capacity(peers.len() * 6);
    for torrent_peer in peers {
        match torrent_peer.peer_addr.ip() {
            IpAddr::V4(ip) => {
                buffer.extend_from_slice(&u32::from(ip).to_be_bytes());
                buffer.extend_from_slice(&torrent_peer.peer_addr.port().to_be_bytes());
            }
            IpAddr::V6(ip) => {
                return Err(TrackerError::Encoding(format!("cannot pack ipv6 peer {} into a compact peer list", ip)));
            }
        }
    }
    Ok(buffer)
}

impl AnnounceResponse {
    /// Builds the response for an already limited and exclusion-filtered
    /// peer list, preserving its order. The seeder/leecher counters are
    /// classified from exactly the peers being emitted.
    pub fn from_peers(interval: u64, peers: &[TorrentPeer], compact: bool, no_peer_id: bool) -> Result<AnnounceResponse, TrackerError> {
        let complete = peers.iter().filter(|peer| peer.left == NumberOfBytes(0)).count() as u64;
        let incomplete = peers.len() as u64 - complete;

        let peer_list = if compact {
            AnnouncePeerList::Compact(compact_peer_bytes(peers)?)
        } else {
            AnnouncePeerList::Full(peers.iter()
                .map(|peer| AnnouncePeerEntry {
                    peer_id: if no_peer_id { None } else { Some(peer.peer_id) },
                    ip: peer.peer_addr.ip().to_string(),
                    port: peer.peer_addr.port(),
                })
                .collect())
        };

        Ok(AnnounceResponse {
            interval,
            complete,
            incomplete,
            peers: peer_list,
        })
    }

    /// Bencodes the response dictionary. Keys are inserted in bencode
    /// order so the output is canonical.
    pub fn encode(&self) -> Vec<u8> {
        match &self.peers {
            AnnouncePeerList::Compact(bytes) => {
                ben_map! {
                    "complete" => ben_int!(self.complete as i64),
                    "incomplete" => ben_int!(self.incomplete as i64),
                    "interval" => ben_int!(self.interval as i64),
                    "peers" => ben_bytes!(bytes.clone())
                }.encode()
            }
            AnnouncePeerList::Full(entries) => {
                let mut peers_list = ben_list!();
                let peers_list_mut = peers_list.list_mut().unwrap();
                for entry in entries {
                    match entry.peer_id {
                        Some(peer_id) => {
                            peers_list_mut.push(ben_map! {
                                "ip" => ben_bytes!(entry.ip.clone()),
                                "peer id" => ben_bytes!(peer_id.0.to_vec()),
                                "port" => ben_int!(entry.port as i64)
                            });
                        }
                        None => {
                            peers_list_mut.push(ben_map! {
                                "ip" => ben_bytes!(entry.ip.clone()),
                                "port" => ben_int!(entry.port as i64)
                            });
                        }
                    }
                }
                ben_map! {
                    "complete" => ben_int!(self.complete as i64),
                    "incomplete" => ben_int!(self.incomplete as i64),
                    "interval" => ben_int!(self.interval as i64),
                    "peers" => peers_list
                }.encode()
            }
        }
    }
}

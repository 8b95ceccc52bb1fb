use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request parameters.
///
/// Zero info hashes is legal and means "every torrent this tracker
/// knows about".
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeQueryRequest {
    pub info_hash: Vec<InfoHash>,
}

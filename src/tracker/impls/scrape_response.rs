use std::borrow::Cow;
use bip_bencode::{ben_int, ben_map, BMutAccess};
use crate::tracker::structs::scrape_response::ScrapeResponse;

impl ScrapeResponse {
    /// Bencodes the `files` dictionary: one entry per torrent, keyed by
    /// the raw 20-byte info hash.
    pub fn encode(&self) -> Vec<u8> {
        let mut files = ben_map!();
        let files_mut = files.dict_mut().unwrap();
        for (info_hash, stats) in self.files.iter() {
            files_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(stats.complete as i64),
                "downloaded" => ben_int!(stats.downloaded as i64),
                "incomplete" => ben_int!(stats.incomplete as i64)
            });
        }

        ben_map! {
            "files" => files
        }.encode()
    }
}

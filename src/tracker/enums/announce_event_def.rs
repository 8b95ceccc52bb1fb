use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;

#[derive(Serialize, Deserialize)]
#[serde(remote = "AnnounceEvent")]
pub enum AnnounceEventDef {
    None = 0,
    Completed = 1,
    Started = 2,
    Stopped = 3
}

use std::fmt;
use std::fmt::Formatter;
use crate::common::enums::tracker_error::TrackerError;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Interprets the raw `event` query value. An absent parameter and an
    /// empty value both mean a keep-alive; anything outside the three
    /// protocol events is rejected.
    pub fn from_query_value(value: Option<&[u8]>) -> Result<AnnounceEvent, TrackerError> {
        let Some(bytes) = value else {
            return Ok(AnnounceEvent::None);
        };
        let Ok(text) = std::str::from_utf8(bytes) else {
            return Err(TrackerError::Validation("invalid event".to_string()));
        };
        match text.to_lowercase().as_str() {
            "" => Ok(AnnounceEvent::None),
            "started" => Ok(AnnounceEvent::Started),
            "stopped" => Ok(AnnounceEvent::Stopped),
            "completed" => Ok(AnnounceEvent::Completed),
            other => Err(TrackerError::Validation(format!("invalid event: {}", other))),
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            AnnounceEvent::None => "none",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
        };
        write!(f, "{}", name)
    }
}

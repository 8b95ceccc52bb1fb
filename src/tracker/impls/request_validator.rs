use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use crate::common::enums::tracker_error::TrackerError;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;
use crate::events::traits::pipeline_stage::PipelineStage;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::request_validator::{RequestValidator, ValidationRules};

/// The query parameters every announce must carry.
pub const REQUIRED_ANNOUNCE_FIELDS: &[&str] = &["info_hash", "peer_id", "port", "uploaded", "downloaded", "left"];

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules { required_fields: REQUIRED_ANNOUNCE_FIELDS }
    }
}

impl RequestValidator {
    pub fn new(rules: ValidationRules) -> RequestValidator {
        RequestValidator { rules }
    }

    /// Checks the raw query map and produces the typed announce request
    /// on the context. Every rejection names the offending field.
    #[tracing::instrument(level = "debug", skip_all)]
    fn validate(&self, ctx: &mut EventContext) -> Result<(), TrackerError> {
        fn first_value<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
            query.get(field).and_then(|values| values.first()).map(|value| value.as_slice())
        }

        fn parse_integer<T: FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, TrackerError> {
            first_value(query, field)
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
                .and_then(|text| text.parse::<T>().ok())
                .ok_or_else(|| TrackerError::Validation(format!("missing or invalid {}", field)))
        }

        let query = &ctx.query;

        for field in self.rules.required_fields {
            if !query.contains_key(*field) {
                return Err(TrackerError::Validation(format!("missing query parameter: {}", field)));
            }
        }

        let event = AnnounceEvent::from_query_value(first_value(query, "event"))?;

        let port = parse_integer::<u16>(query, "port")?;
        if port == 0 {
            return Err(TrackerError::Validation("invalid port: 0".to_string()));
        }

        let uploaded = parse_integer::<u64>(query, "uploaded")?;
        let downloaded = parse_integer::<u64>(query, "downloaded")?;
        let left = parse_integer::<u64>(query, "left")?;

        // an announce may carry several info hashes; every one of them
        // must be well-formed, the first one is the announce subject
        let hashes = match query.get("info_hash") {
            Some(values) => values,
            None => return Err(TrackerError::Validation("missing query parameter: info_hash".to_string())),
        };
        for hash in hashes {
            if hash.len() != 20 {
                return Err(TrackerError::Validation("invalid info_hash: expected 20 bytes".to_string()));
            }
        }
        let info_hash = match hashes.first() {
            Some(hash) => InfoHash::from(hash.as_slice()),
            None => return Err(TrackerError::Validation("missing query parameter: info_hash".to_string())),
        };

        let peer_id = match first_value(query, "peer_id") {
            Some(value) if value.len() == 20 => PeerId::from(value),
            _ => return Err(TrackerError::Validation("invalid peer_id: expected 20 bytes".to_string())),
        };

        let peer_addr = match first_value(query, "ip") {
            None => ctx.remote_addr,
            Some(value) => std::str::from_utf8(value).ok()
                .and_then(|text| IpAddr::from_str(text).ok())
                .ok_or_else(|| TrackerError::Validation("invalid ip".to_string()))?,
        };

        let compact = first_value(query, "compact")
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .and_then(|text| text.parse::<u8>().ok())
            .map(|value| value == 1)
            .unwrap_or(false);

        let no_peer_id = query.contains_key("no_peer_id");

        ctx.announce = Some(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            compact,
            no_peer_id,
            event,
            peer_addr,
        });

        Ok(())
    }
}

impl PipelineStage for RequestValidator {
    fn handle(&self, event: TrackerEvent, _bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError> {
        match event {
            TrackerEvent::RequestValidate => self.validate(ctx),
            _ => Ok(()),
        }
    }
}

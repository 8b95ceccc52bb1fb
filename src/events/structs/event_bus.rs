use std::collections::HashMap;
use std::sync::Arc;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::traits::pipeline_stage::PipelineStage;

/// A single registered handler with its dispatch priority.
pub(crate) struct Subscription {
    pub(crate) priority: i32,
    pub(crate) stage: Arc<dyn PipelineStage>,
}

/// Priority-ordered publish/subscribe table for pipeline events.
///
/// Built once at startup; read-only during request handling.
pub struct EventBus {
    pub(crate) subscriptions: HashMap<TrackerEvent, Vec<Subscription>>,
}

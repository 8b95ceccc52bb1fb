use crate::common::enums::tracker_error::TrackerError;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::EventBus;
use crate::events::structs::event_context::EventContext;

/// A single stage of the request pipeline.
///
/// One stage may be subscribed to several events and dispatch on the
/// `event` argument. The bus reference allows a stage to publish
/// follow-up events (the announce stage sequences validation and the
/// registry mutations this way). Returning an error aborts every
/// remaining stage of the request and surfaces as the failure reason
/// sent to the client.
pub trait PipelineStage: Send + Sync {
    fn handle(&self, event: TrackerEvent, bus: &EventBus, ctx: &mut EventContext) -> Result<(), TrackerError>;
}

use std::sync::Arc;
use log::debug;
use crate::common::enums::tracker_error::TrackerError;
use crate::events::enums::tracker_event::TrackerEvent;
use crate::events::structs::event_bus::{EventBus, Subscription};
use crate::events::structs::event_context::EventContext;
use crate::events::traits::pipeline_stage::PipelineStage;

impl EventBus {
    pub fn new() -> EventBus {
        EventBus { subscriptions: std::collections::HashMap::new() }
    }

    /// Registers `stage` for `event`. Higher priorities fire first; equal
    /// priorities keep their registration order.
    pub fn subscribe(&mut self, event: TrackerEvent, stage: Arc<dyn PipelineStage>, priority: i32) {
        let subscriptions = self.subscriptions.entry(event).or_default();
        subscriptions.push(Subscription { priority, stage });
        // sort_by is stable, so ties stay in registration order
        subscriptions.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    pub fn has_subscribers(&self, event: TrackerEvent) -> bool {
        self.subscriptions.get(&event).is_some_and(|subscriptions| !subscriptions.is_empty())
    }

    /// Invokes every subscription for `event` against the shared context.
    ///
    /// Publishing an event nobody subscribed to succeeds as a no-op. A
    /// stage that stops propagation suppresses the remaining handlers of
    /// this publish call only; the flag is consumed here so a nested
    /// publish never bleeds into the dispatch that triggered it. Stage
    /// errors propagate immediately.
    pub fn publish(&self, event: TrackerEvent, ctx: &mut EventContext) -> Result<(), TrackerError> {
        let Some(subscriptions) = self.subscriptions.get(&event) else {
            debug!("[EVENTS] no subscribers for {}", event);
            return Ok(());
        };

        for subscription in subscriptions {
            subscription.stage.handle(event, self, ctx)?;
            if ctx.take_stopped() {
                debug!("[EVENTS] propagation of {} stopped", event);
                break;
            }
        }

        Ok(())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// The publish/subscribe bus.
pub mod event_bus;

/// Per-request shared context handed to every stage.
pub mod event_context;

/// Subscribe/publish logic.
pub mod event_bus;

/// Context construction and propagation control.
pub mod event_context;

/// Display for event names.
pub mod tracker_event;

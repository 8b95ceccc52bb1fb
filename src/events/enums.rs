/// Named pipeline events.
pub mod tracker_event;

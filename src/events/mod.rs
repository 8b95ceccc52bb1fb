//! Prioritized event dispatch for the request pipeline.
//!
//! Every announce/scrape request runs through a small publish/subscribe
//! bus: validation, registry mutation and response building are separate
//! stages subscribed to named events, invoked in descending priority
//! order. Stages communicate only through the shared [`structs::event_context::EventContext`],
//! and any stage may either stop further dispatch for the current publish
//! call or abort the whole pipeline by returning an error.
//!
//! The registration table is built once at startup and is read-only while
//! requests are being served, so the bus itself needs no locking.

/// Event name enumeration.
pub mod enums;

/// Bus and context data structures.
pub mod structs;

/// Implementation blocks for the bus and context.
pub mod impls;

/// The pipeline stage trait.
pub mod traits;

//! HTTP tracker transport.
//!
//! Serves `/announce` and `/scrape` over HTTP(S) and hands the parsed
//! query maps to the tracker core. Responses are bencoded dictionaries
//! sent as plain text, including the `failure reason` dictionary for
//! every rejected request.

/// Data structures for HTTP request handling.
pub mod structs;

/// Type aliases for the HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

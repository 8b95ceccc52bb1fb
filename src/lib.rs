//! # Swarm-Actix BitTorrent Tracker
//!
//! A lean, event-driven BitTorrent tracker built with Rust and the
//! Actix-web framework.
//!
//! ## Overview
//!
//! Swarm-Actix answers announce and scrape requests over HTTP(S). Every
//! request runs through a priority-ordered event pipeline: the request
//! validator, the registry engine mutating swarm membership, and the
//! response builders are independent stages wired onto an in-process
//! event bus at startup. Storage sits behind a narrow peer-store
//! contract; the built-in adapter keeps swarms in memory.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification (announce)
//! - BEP 23: Tracker Returns Compact Peer Lists (IPv4)
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_actix::config::structs::configuration::Configuration;
//! use swarm_actix::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = TorrentTracker::new(config);
//! let body = tracker.handle_announce(remote_addr, query_map)?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, hex helpers, logging setup, error taxonomy
//! - [`config`] - Configuration management and TOML parsing
//! - [`events`] - Priority-ordered event bus driving the request pipeline
//! - [`http`] - HTTP/HTTPS announce and scrape endpoints
//! - [`stats`] - Atomic request counters
//! - [`store`] - The peer-store contract and the in-memory adapter
//! - [`tracker`] - Value types, pipeline stages and the orchestrator

/// Common utilities and shared functionality.
///
/// Contains the query string parser, hex conversion helpers, logging
/// setup and the failure taxonomy used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating configuration from TOML
/// files, covering tracker parameters and HTTP listener settings.
pub mod config;

/// Prioritized event dispatch.
///
/// The in-process publish/subscribe bus sequencing the pipeline stages
/// of each request, with priority ordering and propagation control.
pub mod events;

/// HTTP tracker protocol implementation.
///
/// Handles announce and scrape requests over HTTP/HTTPS according to
/// the BitTorrent tracker protocol, bencoding every response.
pub mod http;

/// Statistics tracking.
///
/// Atomic counters for announces, scrapes and failures per address
/// family.
pub mod stats;

/// Peer and torrent storage.
///
/// The storage contract the core depends on, plus the built-in
/// in-memory adapter.
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic.
///
/// Value types, the announce/scrape pipeline stages, response builders
/// with compact peer-list encoding, and the orchestrator facade.
pub mod tracker;

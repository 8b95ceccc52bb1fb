/// Top-level configuration file structure.
pub mod configuration;

/// Core tracker parameters (interval, auto registration, peer list size).
pub mod tracker_config;

/// Per-listener HTTP server settings.
pub mod http_trackers_config;

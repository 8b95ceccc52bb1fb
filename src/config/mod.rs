//! Configuration management module.
//!
//! Handles loading, parsing and saving the tracker configuration from a
//! TOML file. The configuration covers the core tracker parameters
//! (announce interval, auto registration, peer list size) and any number
//! of HTTP listener instances.

/// Configuration enumerations (error kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

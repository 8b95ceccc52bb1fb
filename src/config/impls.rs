/// Configuration loading, saving and defaults.
pub mod configuration;

/// Display/Error implementations for configuration errors.
pub mod configuration_error;

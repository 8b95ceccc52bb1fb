//! Shared data structures.

/// Transfer byte counts as reported by clients.
pub mod number_of_bytes;

/// Serde remote definition for [`number_of_bytes::NumberOfBytes`].
pub mod number_of_bytes_def;

//! Model definitions for battery readings and derived health summaries.
//!
//! This module provides the input record type as delivered by upstream
//! sources, the derived per-device and per-site summaries, and the trait
//! every reading source implements.

pub mod traits;
pub mod types;

// Re-export commonly used items at the module level
pub use traits::ReadingSource;
pub use types::{DeviceHealth, HealthStatus, Reading, SiteSummary};

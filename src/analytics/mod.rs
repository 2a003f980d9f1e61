//! Battery consumption analytics.
//!
//! Pure, synchronous computation over already-fetched readings:
//! - [`interval`]: hourly discharge rate between two readings
//! - [`trend`]: average daily consumption of one device
//! - [`fleet`]: per-site, per-device health summaries with ranking
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod fleet;
pub mod interval;
pub mod trend;

pub use fleet::summarize;

//! Uptime measurement.
//!
//! [`UptimeSampler`] is a background task that turns boot-time queries into
//! a stream of [`UptimeSample`]s. It owns no state beyond its schedule and
//! never touches the persisted reminder state.

mod sampler;
mod source;

pub use sampler::{sample_once, SamplerHandle, UptimeSampler};
pub use source::{BootTimeSource, SystemBootTime};

use serde::{Deserialize, Serialize};

/// Seconds between samples.
pub const DEFAULT_SAMPLE_INTERVAL_SECS: u64 = 300;

/// Seconds to wait after a failed boot-time query.
pub const DEFAULT_RETRY_SECS: u64 = 60;

/// One uptime observation. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UptimeSample {
    pub uptime_seconds: u64,
    /// Boot time, seconds since epoch.
    pub boot_time: i64,
}

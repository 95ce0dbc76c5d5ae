use sysinfo::System;

use crate::error::SourceError;

/// Where boot timestamps come from.
pub trait BootTimeSource: Send + Sync {
    /// Boot time in seconds since the epoch.
    fn boot_time(&self) -> Result<i64, SourceError>;
}

/// Boot time as reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBootTime;

impl BootTimeSource for SystemBootTime {
    fn boot_time(&self) -> Result<i64, SourceError> {
        // sysinfo reports 0 when the query fails.
        match System::boot_time() {
            0 => Err(SourceError::Unavailable(
                "operating system returned no boot time".into(),
            )),
            secs => i64::try_from(secs)
                .map_err(|_| SourceError::Unavailable(format!("boot time {secs} out of range"))),
        }
    }
}

impl<T: BootTimeSource + ?Sized> BootTimeSource for std::sync::Arc<T> {
    fn boot_time(&self) -> Result<i64, SourceError> {
        (**self).boot_time()
    }
}

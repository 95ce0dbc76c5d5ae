//! Reboot detection between consecutive samples.

/// Outcome of comparing two boot timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootChange {
    pub rebooted: bool,
}

/// A previous boot time of `0` means "never observed" and is never a reboot.
pub fn detect(previous_boot_time: i64, current_boot_time: i64) -> BootChange {
    BootChange {
        rebooted: previous_boot_time != 0 && previous_boot_time != current_boot_time,
    }
}

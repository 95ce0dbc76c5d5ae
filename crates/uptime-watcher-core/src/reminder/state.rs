use serde::{Deserialize, Serialize};

/// Persisted reminder history, one per installation.
///
/// Timestamps are whole seconds since the epoch; `0` means "never".
/// Missing keys deserialize to their defaults and unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderState {
    /// When a reminder was last dismissed with "not today".
    pub last_reminder_time: i64,
    /// Reminders are suppressed while now < this value.
    pub ignore_until: i64,
    /// Reminders are suppressed until the date moves past `last_reminder_time`.
    pub ignore_today: bool,
    /// Boot time seen by the previous sample.
    pub last_boot_time: i64,
    /// Postponement seconds accrued this boot cycle.
    pub total_delay_time: u64,
    /// Start of the current postponement streak.
    pub delay_start_time: i64,
}

impl ReminderState {
    /// Clear every suppression and the delay budget after a reboot.
    pub(crate) fn reset_for_reboot(&mut self) {
        self.ignore_today = false;
        self.ignore_until = 0;
        self.total_delay_time = 0;
        self.delay_start_time = 0;
    }

    /// Whole hours of postponement used so far.
    pub fn total_delay_hours(&self) -> u64 {
        self.total_delay_time / 3600
    }
}

//! Postponement menu under the 48-hour cumulative cap.
//!
//! The menu is ordered longest first; the presentation layer treats the
//! first entry as the default choice. The ten-minute floor option is always
//! offered when nothing else fits, so a user can always snooze once more.

use serde::{Deserialize, Serialize};

/// Cumulative postponement allowed per boot cycle.
pub const MAX_TOTAL_DELAY_SECS: u64 = 48 * 3600;

/// Shortest postponement, offered even when the cap is reached.
pub const FLOOR_DELAY_SECS: u64 = 600;

const BASE_MENU: [(&str, u64); 6] = [
    ("24 hours", 86_400),
    ("10 hours", 36_000),
    ("5 hours", 18_000),
    ("3 hours", 10_800),
    ("1 hour", 3_600),
    ("10 minutes", FLOOR_DELAY_SECS),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayOption {
    pub label: String,
    pub duration_secs: u64,
}

impl DelayOption {
    fn new(label: &str, duration_secs: u64) -> Self {
        Self {
            label: label.to_string(),
            duration_secs,
        }
    }

    fn floor() -> Self {
        let (label, secs) = BASE_MENU[BASE_MENU.len() - 1];
        Self::new(label, secs)
    }
}

/// Pure postponement-menu calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayScheduler;

impl DelayScheduler {
    /// Menu for `total_delay_hours` already spent.
    pub fn options(total_delay_hours: u64) -> Vec<DelayOption> {
        let used_secs = total_delay_hours.saturating_mul(3600);
        Self::menu(total_delay_hours >= 48, used_secs)
    }

    /// Menu for an exact number of postponed seconds.
    ///
    /// Same as [`Self::options`] on the whole hours, with every option also
    /// checked against the exact second count.
    pub fn options_for_seconds(total_delay_secs: u64) -> Vec<DelayOption> {
        let hours = total_delay_secs / 3600;
        let by_hours = Self::options(hours);
        let exact: Vec<_> = by_hours
            .into_iter()
            .filter(|o| fits(total_delay_secs, o.duration_secs))
            .collect();
        if exact.is_empty() {
            vec![DelayOption::floor()]
        } else {
            exact
        }
    }

    /// Whether `duration_secs` is on the menu for `total_delay_secs`.
    pub fn is_offered(total_delay_secs: u64, duration_secs: u64) -> bool {
        Self::options_for_seconds(total_delay_secs)
            .iter()
            .any(|o| o.duration_secs == duration_secs)
    }

    fn menu(exhausted: bool, used_secs: u64) -> Vec<DelayOption> {
        if exhausted {
            return vec![DelayOption::floor()];
        }
        let options: Vec<_> = BASE_MENU
            .iter()
            .filter(|(_, secs)| fits(used_secs, *secs))
            .map(|(label, secs)| DelayOption::new(label, *secs))
            .collect();
        if options.is_empty() {
            vec![DelayOption::floor()]
        } else {
            options
        }
    }
}

fn fits(used_secs: u64, duration_secs: u64) -> bool {
    used_secs.saturating_add(duration_secs) <= MAX_TOTAL_DELAY_SECS
}

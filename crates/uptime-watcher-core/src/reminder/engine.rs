//! Reminder policy engine.
//!
//! The engine is the single owner of [`ReminderState`]. It reacts to two
//! kinds of events, strictly one at a time:
//!
//! ```text
//! on_sample(UptimeSample)      -> Action (NoAction | ShowReminder)
//! on_user_response(Response)   -> ResponseOutcome   (only after ShowReminder)
//! ```
//!
//! Every call persists the state before returning, so the next event always
//! starts from what is on disk (or from memory if the write failed).

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::boot;
use super::delay::{DelayOption, DelayScheduler};
use super::state::ReminderState;
use crate::clock::Clock;
use crate::error::{RestartError, ResponseError};
use crate::restart::Restarter;
use crate::storage::StateStore;
use crate::uptime::UptimeSample;

/// Uptime above which a reminder is due.
pub const REMINDER_THRESHOLD_SECS: u64 = 24 * 3600;

/// What the presentation layer should do after a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    NoAction { reason: SkipReason },
    ShowReminder(ReminderPrompt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Uptime has not passed the threshold.
    BelowThreshold,
    /// The user chose "not today" and the date has not changed.
    IgnoredToday,
    /// A postponement is still running.
    Postponed,
}

/// Everything the presenter needs to render a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPrompt {
    pub uptime_seconds: u64,
    pub total_delay_hours: u64,
    pub options: Vec<DelayOption>,
}

/// User answer to a shown reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "seconds", rename_all = "snake_case")]
pub enum Response {
    Restart,
    NotToday,
    PostponeBy(u64),
}

#[derive(Debug)]
pub enum ResponseOutcome {
    /// The restart command was dispatched.
    Restarting,
    /// The restart command failed; the reminder will resurface.
    RestartFailed(RestartError),
    /// Reminders are off until the date changes.
    IgnoredToday,
    /// Reminders are off until `ignore_until`.
    Postponed {
        ignore_until: i64,
        total_delay_time: u64,
    },
}

pub struct ReminderPolicyEngine<C: Clock> {
    state: ReminderState,
    store: StateStore,
    clock: C,
    pending: Option<ReminderPrompt>,
}

impl<C: Clock> ReminderPolicyEngine<C> {
    /// Load the persisted state and build an engine around it.
    pub fn new(store: StateStore, clock: C) -> Self {
        let state = store.load();
        Self::with_state(store, clock, state)
    }

    pub fn with_state(store: StateStore, clock: C, state: ReminderState) -> Self {
        Self {
            state,
            store,
            clock,
            pending: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &ReminderState {
        &self.state
    }

    /// The reminder awaiting an answer, if any.
    pub fn pending(&self) -> Option<&ReminderPrompt> {
        self.pending.as_ref()
    }

    /// Postponement menu for the current delay budget.
    pub fn delay_options(&self) -> Vec<DelayOption> {
        DelayScheduler::options_for_seconds(self.state.total_delay_time)
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Evaluate one uptime sample.
    pub fn on_sample(&mut self, sample: UptimeSample) -> Action {
        // An unanswered reminder from the previous tick is dropped.
        self.pending = None;

        if boot::detect(self.state.last_boot_time, sample.boot_time).rebooted {
            tracing::info!(
                previous = self.state.last_boot_time,
                current = sample.boot_time,
                "reboot detected, clearing suppressions and delay budget"
            );
            self.state.reset_for_reboot();
        }
        self.state.last_boot_time = sample.boot_time;

        let action = self.evaluate(sample.uptime_seconds);
        if let Action::ShowReminder(prompt) = &action {
            self.pending = Some(prompt.clone());
        }
        self.persist();
        action
    }

    /// Apply the user's answer to the pending reminder.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::NoPendingReminder`] when no reminder is
    /// shown, or [`ResponseError::NotOffered`] for a postponement that is
    /// not on the menu. Rejected responses leave the state untouched.
    pub fn on_user_response(
        &mut self,
        response: Response,
        restarter: &dyn Restarter,
    ) -> Result<ResponseOutcome, ResponseError> {
        if self.pending.is_none() {
            return Err(ResponseError::NoPendingReminder);
        }
        let outcome = self.apply_response(response, restarter)?;
        self.pending = None;
        Ok(outcome)
    }

    /// Apply a response without requiring a shown reminder.
    ///
    /// Used by one-shot commands that answer a reminder shown by an
    /// earlier process.
    pub fn apply_response(
        &mut self,
        response: Response,
        restarter: &dyn Restarter,
    ) -> Result<ResponseOutcome, ResponseError> {
        let now = self.clock.timestamp();
        let outcome = match response {
            Response::Restart => Self::restart_outcome(restarter.restart()),
            Response::NotToday => {
                self.state.ignore_today = true;
                self.state.last_reminder_time = now;
                tracing::info!("reminders ignored for the rest of the day");
                ResponseOutcome::IgnoredToday
            }
            Response::PostponeBy(duration_secs) => {
                let total = self.state.total_delay_time;
                if !DelayScheduler::is_offered(total, duration_secs) {
                    return Err(ResponseError::NotOffered {
                        duration_secs,
                        total_delay_secs: total,
                    });
                }
                if self.state.delay_start_time == 0 {
                    self.state.delay_start_time = now;
                }
                self.state.ignore_until = now.saturating_add_unsigned(duration_secs);
                self.state.total_delay_time = total + duration_secs;
                tracing::info!(
                    duration_secs,
                    total_delay_time = self.state.total_delay_time,
                    "reminder postponed"
                );
                ResponseOutcome::Postponed {
                    ignore_until: self.state.ignore_until,
                    total_delay_time: self.state.total_delay_time,
                }
            }
        };
        self.persist();
        Ok(outcome)
    }

    /// Record the result of a restart that was run outside the engine.
    ///
    /// This is the `Restart` answer to the pending reminder for callers that
    /// must not block on the restart command themselves.
    pub fn on_restart_result(
        &mut self,
        result: Result<(), RestartError>,
    ) -> Result<ResponseOutcome, ResponseError> {
        if self.pending.is_none() {
            return Err(ResponseError::NoPendingReminder);
        }
        let outcome = Self::restart_outcome(result);
        self.pending = None;
        self.persist();
        Ok(outcome)
    }

    /// Clear the state back to first-run defaults and persist.
    pub fn reset(&mut self) {
        self.state = ReminderState::default();
        self.pending = None;
        self.persist();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn restart_outcome(result: Result<(), RestartError>) -> ResponseOutcome {
        match result {
            Ok(()) => {
                tracing::info!("restart requested");
                ResponseOutcome::Restarting
            }
            Err(e) => {
                tracing::error!(error = %e, "restart failed");
                ResponseOutcome::RestartFailed(e)
            }
        }
    }

    fn evaluate(&mut self, uptime_seconds: u64) -> Action {
        if uptime_seconds <= REMINDER_THRESHOLD_SECS {
            return Action::NoAction {
                reason: SkipReason::BelowThreshold,
            };
        }

        let now = self.clock.now();

        if self.state.ignore_today {
            // Calendar dates, not a rolling 24 hours.
            let new_day = DateTime::from_timestamp(self.state.last_reminder_time, 0)
                .map(|last| now.date_naive() > last.with_timezone(now.offset()).date_naive())
                .unwrap_or(true);
            if !new_day {
                tracing::debug!("reminder suppressed: ignored today");
                return Action::NoAction {
                    reason: SkipReason::IgnoredToday,
                };
            }
            self.state.ignore_today = false;
        }

        if now.timestamp() < self.state.ignore_until {
            tracing::debug!(ignore_until = self.state.ignore_until, "reminder suppressed: postponed");
            return Action::NoAction {
                reason: SkipReason::Postponed,
            };
        }

        tracing::info!(uptime_seconds, "showing restart reminder");
        Action::ShowReminder(ReminderPrompt {
            uptime_seconds,
            total_delay_hours: self.state.total_delay_hours(),
            options: self.delay_options(),
        })
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            tracing::error!(error = %e, "failed to persist reminder state");
        }
    }
}

//! # Uptime Watcher Core Library
//!
//! This library provides the reminder policy behind Uptime Watcher: it
//! measures how long the machine has been up and decides when to nudge the
//! user to restart. All operations are available through the standalone
//! CLI; any graphical front end is a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Uptime Sampler**: a cancellable tokio task that emits an uptime
//!   sample every five minutes and retries failed boot-time queries
//! - **Reminder Engine**: a state machine over the persisted
//!   [`ReminderState`] that turns samples into actions and applies the
//!   user's answers
//! - **Delay Scheduler**: the pure postponement menu under the 48-hour cap
//! - **Storage**: TOML state file and TOML settings
//!
//! ## Key Components
//!
//! - [`ReminderPolicyEngine`]: core reminder state machine
//! - [`UptimeSampler`]: background sampling loop
//! - [`DelayScheduler`]: postponement menu
//! - [`StateStore`]: reminder state persistence
//! - [`Settings`]: application settings

pub mod clock;
pub mod error;
pub mod format;
pub mod reminder;
pub mod restart;
pub mod service;
pub mod storage;
pub mod uptime;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ConfigError, CoreError, ResponseError, RestartError, SourceError, StoreError,
};
pub use format::format_uptime;
pub use reminder::{
    Action, DelayOption, DelayScheduler, ReminderPolicyEngine, ReminderPrompt, ReminderState,
    Response, ResponseOutcome, SkipReason,
};
pub use restart::{DryRunRestarter, Restarter, SystemRestarter};
pub use service::{run_watch, Presenter};
pub use storage::{Settings, StateStore};
pub use uptime::{BootTimeSource, SamplerHandle, SystemBootTime, UptimeSample, UptimeSampler};

pub mod boot;
pub mod delay;
mod engine;
mod state;

pub use boot::{detect, BootChange};
pub use delay::{DelayOption, DelayScheduler, FLOOR_DELAY_SECS, MAX_TOTAL_DELAY_SECS};
pub use engine::{
    Action, ReminderPolicyEngine, ReminderPrompt, Response, ResponseOutcome, SkipReason,
    REMINDER_THRESHOLD_SECS,
};
pub use state::ReminderState;

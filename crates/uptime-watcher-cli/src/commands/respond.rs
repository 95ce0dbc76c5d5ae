use clap::Subcommand;
use serde_json::json;
use uptime_watcher_core::{
    DryRunRestarter, ReminderPolicyEngine, Response, ResponseOutcome, Restarter, StateStore,
    SystemClock, SystemRestarter,
};

#[derive(Subcommand, Clone, Copy)]
pub enum RespondAction {
    /// Restart the machine now
    Restart {
        /// Log the restart instead of performing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Postpone the reminder by one of the offered durations
    Postpone {
        /// Duration in seconds (see `uptime-watcher options`)
        seconds: u64,
    },
    /// Silence reminders until tomorrow
    NotToday,
}

pub fn run(action: RespondAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = ReminderPolicyEngine::new(StateStore::open()?, SystemClock);

    let restarter: &dyn Restarter = match action {
        RespondAction::Restart { dry_run: true } => &DryRunRestarter,
        _ => &SystemRestarter,
    };
    let response = match action {
        RespondAction::Restart { .. } => Response::Restart,
        RespondAction::Postpone { seconds } => Response::PostponeBy(seconds),
        RespondAction::NotToday => Response::NotToday,
    };

    let output = match engine.apply_response(response, restarter)? {
        ResponseOutcome::Restarting => json!({ "type": "restarting" }),
        ResponseOutcome::RestartFailed(e) => return Err(e.into()),
        ResponseOutcome::IgnoredToday => json!({ "type": "ignored_today" }),
        ResponseOutcome::Postponed {
            ignore_until,
            total_delay_time,
        } => json!({
            "type": "postponed",
            "ignore_until": ignore_until,
            "total_delay_time": total_delay_time,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

//! Terminal rendition of the reminder dialogs.

use dialoguer::Select;
use uptime_watcher_core::{format_uptime, Presenter, ReminderPrompt, Response, RestartError};

const RESTART_NOW: usize = 0;
const LATER: usize = 1;
const NOT_TODAY: usize = 2;

pub struct TerminalPresenter;

impl TerminalPresenter {
    fn choose_delay(prompt: &ReminderPrompt) -> Option<Response> {
        let labels: Vec<&str> = prompt.options.iter().map(|o| o.label.as_str()).collect();
        let title = if prompt.total_delay_hours > 0 {
            format!(
                "Postpone for how long? (already postponed {}h)",
                prompt.total_delay_hours
            )
        } else {
            "Postpone for how long?".to_string()
        };

        let picked = Select::new()
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .interact_opt();
        match picked {
            Ok(Some(i)) => prompt
                .options
                .get(i)
                .map(|o| Response::PostponeBy(o.duration_secs)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read postponement choice");
                None
            }
        }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, prompt: &ReminderPrompt) -> Option<Response> {
        println!(
            "\nYour system has been running for {}.",
            format_uptime(prompt.uptime_seconds)
        );
        println!("Regular restarts keep it healthy. Restart now?");

        let picked = Select::new()
            .with_prompt("Restart recommended")
            .items(&["Restart now", "Do it later", "Not today"])
            .default(RESTART_NOW)
            .interact_opt();

        match picked {
            Ok(Some(RESTART_NOW)) => Some(Response::Restart),
            Ok(Some(LATER)) => Self::choose_delay(prompt),
            Ok(Some(NOT_TODAY)) => Some(Response::NotToday),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read reminder choice");
                None
            }
        }
    }

    fn report_restart_failure(&mut self, error: &RestartError) {
        eprintln!("Failed to restart: {error}");
    }
}

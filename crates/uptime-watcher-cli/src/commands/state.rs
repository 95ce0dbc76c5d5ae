use clap::Subcommand;
use uptime_watcher_core::{ReminderPolicyEngine, StateStore, SystemClock};

#[derive(Subcommand)]
pub enum StateAction {
    /// Print the saved reminder state as JSON
    Show,
    /// Reset the reminder state to first-run defaults
    Reset,
    /// Print the state file location
    Path,
}

pub fn run(action: StateAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    match action {
        StateAction::Show => {
            let state = store.try_load()?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        StateAction::Reset => {
            let mut engine = ReminderPolicyEngine::new(store, SystemClock);
            engine.reset();
            println!("state reset to defaults");
        }
        StateAction::Path => println!("{}", store.path().display()),
    }
    Ok(())
}

use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod presenter;

#[derive(Parser)]
#[command(name = "uptime-watcher", version, about = "Uptime Watcher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample uptime in the foreground and prompt for restarts
    Watch {
        /// Log restart requests instead of restarting
        #[arg(long)]
        dry_run: bool,
    },
    /// Print current uptime and reminder state as JSON
    Status,
    /// Take one sample and print the resulting action
    Check {
        /// Pretend the machine has been up this many seconds
        #[arg(long)]
        uptime: Option<u64>,
    },
    /// Print the postponement menu
    Options {
        /// Hours already postponed (default: from saved state)
        #[arg(long)]
        hours: Option<u64>,
    },
    /// Answer a reminder
    Respond {
        #[command(subcommand)]
        action: commands::respond::RespondAction,
    },
    /// Reminder state management
    State {
        #[command(subcommand)]
        action: commands::state::StateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let settings = uptime_watcher_core::Settings::load_or_default();
    logging::init(&settings.logging, matches!(cli.command, Commands::Watch { .. }));

    let result = match cli.command {
        Commands::Watch { dry_run } => commands::watch::run(&settings, dry_run),
        Commands::Status => commands::status::run(),
        Commands::Check { uptime } => commands::status::check(uptime),
        Commands::Options { hours } => commands::status::options(hours),
        Commands::Respond { action } => commands::respond::run(action),
        Commands::State { action } => commands::state::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

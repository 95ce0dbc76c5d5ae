//! OS restart dispatch.

use std::process::Command;

use crate::error::RestartError;

pub trait Restarter: Send + Sync {
    fn restart(&self) -> Result<(), RestartError>;
}

/// Restarts the machine with the platform's shutdown command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRestarter;

/// Logs the restart instead of performing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRestarter;

const WINDOWS_ARGS: &[&str] = &["/r", "/t", "0"];
const MACOS_ARGS: &[&str] = &["shutdown", "-r", "now"];
const UNIX_ARGS: &[&str] = &["reboot"];

/// Program and arguments used to restart on `os`, if supported.
pub fn restart_command(os: &str) -> Option<(&'static str, &'static [&'static str])> {
    match os {
        "windows" => Some(("shutdown", WINDOWS_ARGS)),
        "macos" => Some(("sudo", MACOS_ARGS)),
        "linux" | "freebsd" => Some(("sudo", UNIX_ARGS)),
        _ => None,
    }
}

impl Restarter for SystemRestarter {
    fn restart(&self) -> Result<(), RestartError> {
        let os = std::env::consts::OS;
        let (program, args) =
            restart_command(os).ok_or_else(|| RestartError::Unsupported(os.to_string()))?;
        let command = format!("{program} {}", args.join(" "));

        tracing::warn!(%command, "restarting system");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| RestartError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RestartError::CommandFailed {
                command,
                status: status.to_string(),
            })
        }
    }
}

impl Restarter for DryRunRestarter {
    fn restart(&self) -> Result<(), RestartError> {
        let os = std::env::consts::OS;
        match restart_command(os) {
            Some((program, args)) => {
                tracing::info!(command = %format!("{program} {}", args.join(" ")), "dry run: skipping restart");
                Ok(())
            }
            None => Err(RestartError::Unsupported(os.to_string())),
        }
    }
}

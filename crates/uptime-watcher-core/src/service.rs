//! Watch service: the engine side of the two-task runtime.
//!
//! The sampler publishes into a `watch` channel; this loop takes the latest
//! sample, runs it through the engine, and hands any reminder to the
//! presenter on a blocking thread. A restart command runs on the blocking
//! pool too. The next sample is not read until the response has been
//! applied and persisted.

use std::sync::Arc;

use tokio::sync::watch;

use crate::clock::Clock;
use crate::error::RestartError;
use crate::reminder::{Action, ReminderPolicyEngine, ReminderPrompt, Response, ResponseOutcome};
use crate::restart::Restarter;
use crate::uptime::UptimeSample;

/// Presentation layer contract.
///
/// `present` may block; it runs on tokio's blocking pool.
pub trait Presenter: Send + 'static {
    /// Show the reminder and return the user's answer, or `None` if it was
    /// dismissed without one.
    fn present(&mut self, prompt: &ReminderPrompt) -> Option<Response>;

    fn report_restart_failure(&mut self, error: &RestartError);
}

/// Drive `engine` from `samples` until the sampler goes away.
///
/// Returns the engine so callers can inspect the final state.
pub async fn run_watch<C, P>(
    mut engine: ReminderPolicyEngine<C>,
    mut samples: watch::Receiver<Option<UptimeSample>>,
    mut presenter: P,
    restarter: Arc<dyn Restarter>,
) -> ReminderPolicyEngine<C>
where
    C: Clock,
    P: Presenter,
{
    while samples.changed().await.is_ok() {
        let Some(sample) = *samples.borrow_and_update() else {
            continue;
        };

        let prompt = match engine.on_sample(sample) {
            Action::ShowReminder(prompt) => prompt,
            Action::NoAction { reason } => {
                tracing::debug!(?reason, "no reminder this tick");
                continue;
            }
        };

        let answered = tokio::task::spawn_blocking(move || {
            let response = presenter.present(&prompt);
            (presenter, response)
        })
        .await;

        let response = match answered {
            Ok((returned, response)) => {
                presenter = returned;
                response
            }
            Err(e) => {
                tracing::error!(error = %e, "presenter panicked, stopping watch loop");
                return engine;
            }
        };

        let Some(response) = response else {
            tracing::info!("reminder dismissed without an answer");
            continue;
        };

        let applied = if matches!(response, Response::Restart) {
            let restarter = Arc::clone(&restarter);
            match tokio::task::spawn_blocking(move || restarter.restart()).await {
                Ok(result) => engine.on_restart_result(result),
                Err(e) => {
                    tracing::error!(error = %e, "restart worker panicked, stopping watch loop");
                    return engine;
                }
            }
        } else {
            engine.on_user_response(response, restarter.as_ref())
        };

        match applied {
            Ok(ResponseOutcome::RestartFailed(e)) => presenter.report_restart_failure(&e),
            Ok(outcome) => tracing::debug!(?outcome, "response applied"),
            Err(e) => tracing::warn!(error = %e, ?response, "response rejected"),
        }
    }

    tracing::info!("sample channel closed, watch loop finished");
    engine
}

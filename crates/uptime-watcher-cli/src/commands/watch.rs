use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uptime_watcher_core::{
    run_watch, DryRunRestarter, ReminderPolicyEngine, Restarter, Settings, StateStore,
    SystemBootTime, SystemClock, SystemRestarter, UptimeSampler,
};

use crate::presenter::TerminalPresenter;

pub fn run(settings: &Settings, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    let restarter: Arc<dyn Restarter> = if dry_run {
        Arc::new(DryRunRestarter)
    } else {
        Arc::new(SystemRestarter)
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tracing::info!(state = %store.path().display(), "uptime watcher started");
        let engine = ReminderPolicyEngine::new(store, SystemClock);
        let (sampler, samples) =
            UptimeSampler::new(SystemBootTime, SystemClock, &settings.sampler).spawn();

        tokio::select! {
            _ = run_watch(engine, samples, TerminalPresenter, restarter) => {}
            _ = stop_requested(tokio::signal::ctrl_c()) => {}
        }

        sampler.shutdown().await;
        tracing::info!("uptime watcher stopped");
    });
    // A prompt may still be waiting on stdin.
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}

/// Resolve once `signal` fires. A signal that cannot be installed never
/// resolves, so the watch keeps running without a stop key.
async fn stop_requested<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "failed to listen for ctrl-c, watching without it");
        std::future::pending::<()>().await;
    }
    tracing::info!("stop requested");
}

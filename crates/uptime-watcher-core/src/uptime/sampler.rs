use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{BootTimeSource, UptimeSample};
use crate::clock::Clock;
use crate::error::SourceError;
use crate::storage::SamplerSettings;

/// Take one sample: `now - boot_time`, floored at zero.
pub fn sample_once(
    source: &dyn BootTimeSource,
    clock: &dyn Clock,
) -> Result<UptimeSample, SourceError> {
    let boot_time = source.boot_time()?;
    let uptime = clock.timestamp().saturating_sub(boot_time);
    Ok(UptimeSample {
        uptime_seconds: u64::try_from(uptime).unwrap_or(0),
        boot_time,
    })
}

/// Periodic uptime sampler.
///
/// Publishes into a `watch` channel, so a slow consumer only ever sees the
/// latest sample and the sampler never waits on it.
pub struct UptimeSampler<S, C> {
    source: S,
    clock: C,
    interval: Duration,
    retry_delay: Duration,
}

/// Running sampler task.
pub struct SamplerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<S, C> UptimeSampler<S, C>
where
    S: BootTimeSource + 'static,
    C: Clock + 'static,
{
    pub fn new(source: S, clock: C, settings: &SamplerSettings) -> Self {
        Self {
            source,
            clock,
            interval: settings.interval(),
            retry_delay: settings.retry_delay(),
        }
    }

    /// Spawn the sampling loop on the current tokio runtime.
    pub fn spawn(self) -> (SamplerHandle, watch::Receiver<Option<UptimeSample>>) {
        let (sample_tx, sample_rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(sample_tx, shutdown_rx));
        (
            SamplerHandle {
                shutdown: shutdown_tx,
                task,
            },
            sample_rx,
        )
    }

    async fn run(
        self,
        samples: watch::Sender<Option<UptimeSample>>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "uptime sampler started"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            let wait = match sample_once(&self.source, &self.clock) {
                Ok(sample) => {
                    tracing::info!(
                        uptime_seconds = sample.uptime_seconds,
                        boot_time = sample.boot_time,
                        "uptime check"
                    );
                    if samples.send(Some(sample)).is_err() {
                        tracing::debug!("no sample consumers left");
                        break;
                    }
                    self.interval
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        retry_secs = self.retry_delay.as_secs(),
                        "failed to read boot time"
                    );
                    self.retry_delay
                }
            };

            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = stop_requested(&mut shutdown) => break,
            }
        }

        tracing::info!("uptime sampler stopped");
    }
}

impl SamplerHandle {
    /// Ask the loop to exit. Takes effect without waiting out the interval.
    pub fn stop(&self) {
        // The loop may already be gone.
        let _ = self.shutdown.send(true);
    }

    /// Stop and wait for the loop to finish.
    pub async fn shutdown(self) {
        self.stop();
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "uptime sampler task failed");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn stop_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            // Handle dropped without calling stop.
            return;
        }
    }
}

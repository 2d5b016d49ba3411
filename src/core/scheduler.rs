//! Cron-based scheduler that triggers snapshot runs

use crate::core::runtime::SnapshotRuntime;
use crate::error::ConfigError;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub struct SnapshotScheduler {
    runtime: Arc<SnapshotRuntime>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<JoinHandle<()>>>>,
}

impl SnapshotScheduler {
    /// `cron_expr` uses the six-field form: second minute hour day month weekday.
    pub fn new(runtime: Arc<SnapshotRuntime>, cron_expr: &str) -> Result<Self, ConfigError> {
        let schedule = Schedule::from_str(cron_expr).map_err(|e| ConfigError::Cron {
            expr: cron_expr.to_string(),
            reason: e.to_string(),
        })?;

        info!(cron = %cron_expr, "SnapshotScheduler: created");

        Ok(Self {
            runtime,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next tick strictly after now, if the schedule has one.
    pub fn next_run(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Spawn the cron loop. A no-op while a loop is already running.
    pub async fn start(&self) {
        let mut slot = self.handle.write().await;
        if slot.as_ref().is_some_and(|h| !h.is_finished()) {
            warn!("SnapshotScheduler: already running, ignoring start");
            return;
        }

        let runtime = self.runtime.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("SnapshotScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    info!("SnapshotScheduler: schedule exhausted");
                    break;
                };
                let wait = (next_tick - chrono::Utc::now()).to_std().unwrap_or_default();
                tokio::time::sleep(wait).await;

                info!(tick = %next_tick, "SnapshotScheduler: cron tick");
                if let Err(e) = runtime.run_once().await {
                    error!(error = %e, "SnapshotScheduler: snapshot run failed");
                }
            }
        });

        *slot = Some(handle);
    }

    pub async fn stop(&self) {
        if let Some(h) = self.handle.write().await.take() {
            h.abort();
            info!("SnapshotScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

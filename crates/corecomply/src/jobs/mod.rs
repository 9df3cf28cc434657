//! Background jobs. Both current jobs are hook points that only log and wait.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const DEFAULT_SIMULATED_WORK: Duration = Duration::from_secs(1);

#[async_trait]
pub trait ScheduledJob: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn run(&self);
}

/// Sweeps for policy attestations that need a reminder.
#[derive(Debug, Clone)]
pub struct AttestationReminderJob {
    simulated_work: Duration,
}

impl AttestationReminderJob {
    pub fn new(simulated_work: Duration) -> Self {
        Self { simulated_work }
    }
}

impl Default for AttestationReminderJob {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_WORK)
    }
}

#[async_trait]
impl ScheduledJob for AttestationReminderJob {
    fn name(&self) -> &'static str {
        "attestation-reminders"
    }

    fn description(&self) -> &'static str {
        "Send reminders for outstanding policy attestations"
    }

    async fn run(&self) {
        info!(job = self.name(), "running attestation reminder sweep");
        tokio::time::sleep(self.simulated_work).await;
        info!(job = self.name(), "attestation reminder sweep complete");
    }
}

/// Recomputes control risk scores.
#[derive(Debug, Clone)]
pub struct RiskScoreRecomputeJob {
    simulated_work: Duration,
}

impl RiskScoreRecomputeJob {
    pub fn new(simulated_work: Duration) -> Self {
        Self { simulated_work }
    }
}

impl Default for RiskScoreRecomputeJob {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_WORK)
    }
}

#[async_trait]
impl ScheduledJob for RiskScoreRecomputeJob {
    fn name(&self) -> &'static str {
        "risk-score-recompute"
    }

    fn description(&self) -> &'static str {
        "Recalculate risk scores across controls"
    }

    async fn run(&self) {
        info!(job = self.name(), "recomputing risk scores");
        tokio::time::sleep(self.simulated_work).await;
        info!(job = self.name(), "risk score recompute complete");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("unknown job '{0}'")]
    Unknown(String),
}

/// Registry of jobs that can be run once by name or on an interval.
#[derive(Clone)]
pub struct JobRunner {
    jobs: Vec<Arc<dyn ScheduledJob>>,
}

impl JobRunner {
    pub fn new(jobs: Vec<Arc<dyn ScheduledJob>>) -> Self {
        Self { jobs }
    }

    pub fn standard() -> Self {
        Self::with_simulated_work(DEFAULT_SIMULATED_WORK)
    }

    pub fn with_simulated_work(simulated_work: Duration) -> Self {
        let attestation: Arc<dyn ScheduledJob> =
            Arc::new(AttestationReminderJob::new(simulated_work));
        let risk: Arc<dyn ScheduledJob> = Arc::new(RiskScoreRecomputeJob::new(simulated_work));
        Self::new(vec![attestation, risk])
    }

    pub fn jobs(&self) -> impl Iterator<Item = &dyn ScheduledJob> {
        self.jobs.iter().map(|job| job.as_ref())
    }

    pub async fn run_once(&self, name: &str) -> Result<(), JobError> {
        let job = self
            .jobs
            .iter()
            .find(|job| job.name() == name)
            .ok_or_else(|| JobError::Unknown(name.to_string()))?;
        job.run().await;
        Ok(())
    }

    pub async fn run_all(&self) {
        for job in &self.jobs {
            job.run().await;
        }
    }

    /// Run every job each `period` until `shutdown` flips to `true` or its sender drops.
    pub fn spawn_periodic(
        self,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => self.run_all().await,
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            warn!("job scheduler stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingJob {
        runs: AtomicUsize,
    }

    #[async_trait]
    impl ScheduledJob for CountingJob {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "test job"
        }

        async fn run(&self) {
            self.runs.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn standard_runner_lists_both_jobs() {
        let runner = JobRunner::standard();
        let names: Vec<_> = runner.jobs().map(|job| job.name()).collect();
        assert_eq!(names, vec!["attestation-reminders", "risk-score-recompute"]);
    }

    #[tokio::test(start_paused = true)]
    async fn run_once_waits_for_simulated_work() {
        let runner = JobRunner::with_simulated_work(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        runner
            .run_once("risk-score-recompute")
            .await
            .expect("job exists");
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn run_once_rejects_unknown_job() {
        let runner = JobRunner::with_simulated_work(Duration::ZERO);
        let err = runner.run_once("nightly-backup").await.expect_err("unknown");
        assert_eq!(err.to_string(), "unknown job 'nightly-backup'");
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_runner_ticks_until_shutdown() {
        let job = Arc::new(CountingJob::default());
        let runner = JobRunner::new(vec![job.clone() as Arc<dyn ScheduledJob>]);
        let (tx, rx) = watch::channel(false);

        let handle = runner.spawn_periodic(Duration::from_secs(60), rx);
        tokio::time::sleep(Duration::from_secs(150)).await;
        tx.send(true).expect("scheduler listening");
        handle.await.expect("scheduler exits cleanly");

        assert_eq!(job.runs.load(Ordering::SeqCst), 3);
    }
}
